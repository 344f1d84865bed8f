/// The fruit list the alphabetized screen was built around
pub fn sample_fruits() -> Vec<&'static str> {
    vec![
        "Apple",
        "Orange",
        "Pineapple",
        "Kiwi",
        "Tomato",
        "Banana",
        "Mango",
        "Kumquat",
        "Strawberry",
        "Blackberry",
        "Blueberry",
        "Raspberry",
        "Pear",
        "Peach",
        "Cherry",
        "Watermelon",
        "Apricot",
        "Fig",
        "Currant",
        "Lemon",
        "Lime",
        "Coconut",
    ]
}
