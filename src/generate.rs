//! Word generators for the benchmark harness: random words, sequential
//! words (worst case for tree shape) and words sharing a long common
//! prefix.

use std::collections::HashSet;

use rand::Rng;

use crate::alphabet::ALPHABET;

pub fn random_words(count: usize, min_length: usize, max_length: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let words: HashSet<String> = (0..count)
        .map(|_| {
            let length = rng.gen_range(min_length..=max_length);
            (0..length)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect();
    words.into_iter().collect()
}

pub fn sequential_words(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("word{:06}", i)).collect()
}

pub fn similar_words(count: usize, base: &str) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let mut words = vec![base.to_string()];
    for _ in 1..count {
        let suffix_len = rng.gen_range(1..=5);
        let suffix: String = (0..suffix_len)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        words.push(format!("{}{}", base, suffix));
    }
    words
}

#[cfg(test)]
mod tests {
    use super::{random_words, sequential_words, similar_words};

    #[test]
    fn random_words_respects_length_bounds() {
        let words = random_words(500, 3, 10);
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| (3..=10).contains(&w.len())));
        assert!(words.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn random_words_are_distinct() {
        let words = random_words(500, 3, 10);
        let mut deduped = words.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), words.len());
    }

    #[test]
    fn sequential_words_are_zero_padded() {
        let words = sequential_words(3);
        assert_eq!(words, ["word000000", "word000001", "word000002"]);
    }

    #[test]
    fn similar_words_share_the_base_prefix() {
        let words = similar_words(100, "commonprefix");
        assert_eq!(words.len(), 100);
        assert_eq!(words[0], "commonprefix");
        assert!(words.iter().all(|w| w.starts_with("commonprefix")));
    }
}
