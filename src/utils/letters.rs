use std::collections::HashMap;

/// Count how many times each letter occurs in a word
pub fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut map = HashMap::new();

    for ch in word.chars() {
        *map.entry(ch).or_insert(0) += 1;
    }

    map
}

/// Check whether `candidate` can be spelled from the letters of `root`.
///
/// Each letter of the root may be used at most as many times as it occurs
/// in the root. Walks the candidate left to right, removing one matching
/// letter from a working copy of the root's counts per character.
pub fn can_spell_from(root: &str, candidate: &str) -> bool {
    let mut remaining = letter_counts(root);

    for ch in candidate.chars() {
        match remaining.get_mut(&ch) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}

/// Length of a word in characters (Unicode scalar values), not bytes
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_counts() {
        let counts = letter_counts("silkworm");
        assert_eq!(counts.get(&'s'), Some(&1));
        assert_eq!(counts.get(&'o'), Some(&1));
        assert_eq!(counts.get(&'x'), None);

        let counts = letter_counts("letter");
        assert_eq!(counts.get(&'t'), Some(&2));
        assert_eq!(counts.get(&'e'), Some(&2));
    }

    #[test]
    fn test_can_spell_subset() {
        assert!(can_spell_from("silkworm", "silk"));
        assert!(can_spell_from("silkworm", "worm"));
        assert!(can_spell_from("silkworm", "milk"));
        assert!(can_spell_from("silkworm", "silkworm"));
    }

    #[test]
    fn test_can_spell_rejects_missing_letters() {
        assert!(!can_spell_from("silkworm", "xyz"));
        assert!(!can_spell_from("silkworm", "silky"));
    }

    #[test]
    fn test_can_spell_respects_multiplicity() {
        // Only one 'o' in silkworm
        assert!(!can_spell_from("silkworm", "room"));
        // Two 't's available in letter
        assert!(can_spell_from("letter", "tet"));
        assert!(!can_spell_from("letter", "tett"));
    }

    #[test]
    fn test_can_spell_empty_candidate() {
        assert!(can_spell_from("silkworm", ""));
        assert!(!can_spell_from("", "a"));
    }

    #[test]
    fn test_char_len_counts_characters_not_bytes() {
        assert_eq!(char_len("cat"), 3);
        assert_eq!(char_len("café"), 4);
        assert_eq!("café".len(), 5);
    }
}
