use std::collections::HashMap;

/// Count how many times each character occurs in a word.
pub fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();

    for ch in word.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }

    counts
}

/// Check whether `candidate` can be assembled from the letters of `source`,
/// respecting multiplicity: each letter of `source` may be consumed at most
/// as many times as it occurs there.
///
/// This is a multiset test, not a substring test: "ape" is spellable from
/// "paper" even though it is not a contiguous substring of it.
pub fn is_spellable_from(candidate: &str, source: &str) -> bool {
    let mut available = letter_counts(source);

    for ch in candidate.chars() {
        match available.get_mut(&ch) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_counts() {
        let counts = letter_counts("paper");
        assert_eq!(counts.get(&'p'), Some(&2));
        assert_eq!(counts.get(&'a'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&1));
        assert_eq!(counts.get(&'r'), Some(&1));
        assert_eq!(counts.get(&'z'), None);
    }

    #[test]
    fn test_non_contiguous_subset_is_spellable() {
        // Not a substring of "paper", but every letter is available
        assert!(is_spellable_from("ape", "paper"));
    }

    #[test]
    fn test_missing_letter_is_not_spellable() {
        // "paper" has no 'l'
        assert!(!is_spellable_from("apple", "paper"));
    }

    #[test]
    fn test_multiplicity_is_respected() {
        assert!(is_spellable_from("pp", "paper"));
        assert!(!is_spellable_from("ppp", "paper"));
    }

    #[test]
    fn test_word_is_spellable_from_itself() {
        assert!(is_spellable_from("paper", "paper"));
    }

    #[test]
    fn test_empty_candidate_is_spellable() {
        assert!(is_spellable_from("", "paper"));
    }

    #[test]
    fn test_single_use_of_each_letter() {
        assert!(is_spellable_from("sworm", "silkworm"));
    }
}
