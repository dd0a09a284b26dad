use crate::{
    dictionary::DictionaryOracle,
    models::RejectionKind,
    utils::letters::{can_spell_from, char_len},
};

/// Shortest word, in characters, that can be accepted
pub const MIN_WORD_LENGTH: usize = 3;

pub struct WordValidator<D> {
    dictionary: D,
    language: String,
}

impl<D: DictionaryOracle> WordValidator<D> {
    pub fn new(dictionary: D, language: impl Into<String>) -> Self {
        Self {
            dictionary,
            language: language.into(),
        }
    }

    /// Lowercase and trim surrounding whitespace. Returns `None` for blank input.
    pub fn normalize(raw: &str) -> Option<String> {
        let word = raw.to_lowercase().trim().to_string();
        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }

    /// Run every check in order and report the first one that fails
    pub fn validate(
        &self,
        word: &str,
        root_word: &str,
        used_words: &[String],
    ) -> Result<(), RejectionKind> {
        if !Self::is_original(word, used_words) {
            return Err(RejectionKind::DuplicateWord);
        }

        if !Self::is_possible(word, root_word) {
            return Err(RejectionKind::ImpossibleWord);
        }

        if !self.is_real(word) {
            return Err(RejectionKind::NotAWord);
        }

        if !Self::is_long_enough(word) {
            return Err(RejectionKind::TooShort);
        }

        Ok(())
    }

    /// Word has not been accepted yet this round
    pub fn is_original(word: &str, used_words: &[String]) -> bool {
        !used_words.iter().any(|used| used == word)
    }

    /// Word can be spelled from the root word's letters
    pub fn is_possible(word: &str, root_word: &str) -> bool {
        can_spell_from(root_word, word)
    }

    /// Check if word exists in dictionary
    pub fn is_real(&self, word: &str) -> bool {
        self.dictionary.is_recognized_word(word, &self.language)
    }

    pub fn is_long_enough(word: &str) -> bool {
        char_len(word) >= MIN_WORD_LENGTH
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn validator(words: &[&str]) -> WordValidator<Dictionary> {
        WordValidator::new(Dictionary::from_words("en", words), "en")
    }

    #[test]
    fn test_normalize() {
        type V = WordValidator<Dictionary>;
        assert_eq!(V::normalize("  Cat "), Some("cat".to_string()));
        assert_eq!(V::normalize("SILK\n"), Some("silk".to_string()));
        assert_eq!(V::normalize("cat"), V::normalize("  Cat "));
        assert_eq!(V::normalize(""), None);
        assert_eq!(V::normalize(" \t\n"), None);
    }

    #[test]
    fn test_order_duplicate_before_everything() {
        let v = validator(&[]);
        let used = vec!["xyz".to_string()];
        // Impossible, unknown and duplicate: duplicate wins
        assert_eq!(
            v.validate("xyz", "silkworm", &used),
            Err(RejectionKind::DuplicateWord)
        );
    }

    #[test]
    fn test_order_impossible_before_not_a_word() {
        let v = validator(&[]);
        assert_eq!(
            v.validate("xyz", "silkworm", &[]),
            Err(RejectionKind::ImpossibleWord)
        );
    }

    #[test]
    fn test_order_not_a_word_before_too_short() {
        let v = validator(&[]);
        assert_eq!(
            v.validate("mr", "silkworm", &[]),
            Err(RejectionKind::NotAWord)
        );
    }

    #[test]
    fn test_too_short() {
        let v = validator(&["mr", "at"]);
        assert_eq!(
            v.validate("mr", "silkworm", &[]),
            Err(RejectionKind::TooShort)
        );
        assert_eq!(v.validate("at", "cat", &[]), Err(RejectionKind::TooShort));
    }

    #[test]
    fn test_three_letter_word_accepted() {
        let v = validator(&["ski"]);
        assert_eq!(v.validate("ski", "silkworm", &[]), Ok(()));
    }

    #[test]
    fn test_is_real_uses_configured_language() {
        let v = WordValidator::new(Dictionary::from_words("en", ["silk"]), "fr");
        assert_eq!(v.language(), "fr");
        assert!(!v.is_real("silk"));
    }
}
