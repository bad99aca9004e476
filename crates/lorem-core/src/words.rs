/// The compiled-in filler vocabulary. Every entry is lowercase ASCII.
pub const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet",
    "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore",
    "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud",
    "exercitation", "ullamco", "laboris", "nisi", "aliquip",
    "ex", "ea", "commodo", "consequat", "duis",
    "aute", "irure", "in", "reprehenderit", "voluptate",
    "velit", "esse", "cillum", "eu", "fugiat",
    "nulla", "pariatur", "excepteur", "sint", "occaecat",
    "cupidatat", "non", "proident", "sunt", "culpa",
    "qui", "officia", "deserunt", "mollit", "anim",
    "id", "est", "laborum", "perspiciatis", "unde",
    "omnis", "iste", "natus", "error", "voluptatem",
    "accusantium", "doloremque", "laudantium", "totam", "rem",
    "aperiam", "eaque", "ipsa", "quae", "ab",
    "illo", "inventore", "veritatis", "quasi", "architecto",
    "beatae", "vitae", "dicta", "explicabo", "nemo",
    "ipsam", "quia", "voluptas", "aspernatur", "aut",
    "odit", "fugit", "consequuntur", "magni", "dolores",
    "eos", "ratione", "sequi", "nesciunt", "neque",
    "porro", "quisquam", "dolorem", "numquam", "eius",
    "modi", "tempora", "incidunt", "magnam", "quaerat",
];

/// Returns an owned copy of the vocabulary for a generator to shuffle.
pub fn vocabulary() -> Vec<String> {
    WORDS.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_not_empty() {
        assert!(!WORDS.is_empty());
        assert_eq!(vocabulary().len(), WORDS.len());
    }

    #[test]
    fn words_are_lowercase_ascii() {
        for word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "unexpected word: {}",
                word
            );
        }
    }

    #[test]
    fn vocabulary_copy_is_independent() {
        let mut a = vocabulary();
        let b = vocabulary();
        a.reverse();
        assert_eq!(b[0], WORDS[0]);
        assert_ne!(a[0], b[0]);
    }
}
