use crate::utils::letters::char_len;

pub struct Scorer;

impl Scorer {
    /// Score for an accepted word: one point per character
    pub fn score(word: &str) -> u32 {
        u32::try_from(char_len(word)).unwrap_or(u32::MAX)
    }

    /// Total score for a sequence of accepted words
    pub fn total<'a, I>(words: I) -> u32
    where
        I: IntoIterator<Item = &'a str>,
    {
        words
            .into_iter()
            .fold(0u32, |total, word| total.saturating_add(Self::score(word)))
    }
}
