use std::collections::HashSet;

/// Embedded English + French word list. The original loaded this lazily
/// from the network cache; shipping it in the binary makes the scorer a
/// pure function of its input.
const WORDS: &str = include_str!("words.txt");

/// Build the default lowercase dictionary set.
pub fn default_words() -> HashSet<String> {
    WORDS
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_words_loaded() {
        let words = default_words();
        assert!(words.len() > 500);
        assert!(words.contains("the"));
        assert!(words.contains("matrix"));
        assert!(words.contains("amour"));
    }

    #[test]
    fn test_no_comments_or_empties() {
        let words = default_words();
        assert!(!words.contains(""));
        assert!(!words.iter().any(|w| w.starts_with('#')));
    }
}
