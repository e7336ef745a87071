//! Heuristic syllable counting.
//!
//! The vowel set here is `a e i o u`, without `y`. The hyphenator treats
//! `y` as a vowel; the two sets are deliberately kept apart so scores and
//! hyphenation stay stable.

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Count syllables in a single word.
///
/// Lowercases the word, drops a trailing `e` from words longer than two
/// characters, then counts maximal vowel runs. Non-empty words always score
/// at least 1; empty input scores 0.
pub fn count_syllables(word: &str) -> usize {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return 0;
    }

    let stem = match word.strip_suffix('e') {
        Some(stem) if word.chars().count() > 2 => stem,
        _ => word.as_str(),
    };

    let mut syllables: usize = 0;
    let mut previous_was_vowel = false;

    for ch in stem.chars() {
        let is_vowel = VOWELS.contains(&ch);
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    syllables.max(1)
}
