//! Text processing utilities.
//!
//! Provides the sentence segmenter shared by the restructuring pipeline,
//! the readability scorer, and per-sentence simplification, plus the
//! alphabetic word extraction used for counting.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for countable words: runs of ASCII letters only.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("valid regex"));

/// Split text into sentences.
///
/// A boundary is any `.`, `!` or `?` immediately followed by one or more
/// whitespace characters. The punctuation stays with the sentence it ends and
/// the whitespace run is dropped. Text without a boundary comes back as a
/// single sentence; blank text yields nothing.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !is_sentence_terminator(ch) {
            continue;
        }

        let end = i + ch.len_utf8();
        let mut resume = end;
        while let Some(&(j, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            resume = j + next.len_utf8();
            chars.next();
        }

        if resume > end {
            push_sentence(&mut sentences, &text[start..end]);
            start = resume;
        }
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

/// Extract countable words: maximal runs of ASCII letters.
///
/// Digits and punctuation split words apart, so `"don't"` yields `"don"`
/// and `"t"`.
pub fn extract_words(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Number of whitespace-delimited words, as used by the fragment filter.
pub fn whitespace_word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn push_sentence(sentences: &mut Vec<String>, candidate: &str) {
    let sentence = candidate.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences, vec!["This is a sentence.", "This is another sentence."]);
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = split_sentences("Are you serious? I can't believe it! This is amazing.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[1], "I can't believe it!");
    }

    #[test]
    fn punctuation_without_whitespace_is_not_a_boundary() {
        let sentences = split_sentences("The price is 3.14 dollars.Really. Yes.");
        assert_eq!(sentences, vec!["The price is 3.14 dollars.Really.", "Yes."]);
    }

    #[test]
    fn abbreviations_are_split_naively() {
        let sentences = split_sentences("Dr. Smith went home.");
        assert_eq!(sentences, vec!["Dr.", "Smith went home."]);
    }

    #[test]
    fn whitespace_runs_and_newlines_are_consumed() {
        let sentences = split_sentences("  One.\n\n\tTwo!   Three?  ");
        assert_eq!(sentences, vec!["One.", "Two!", "Three?"]);
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        assert_eq!(split_sentences("  no ending here  "), vec!["no ending here"]);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n ").is_empty());
    }

    #[test]
    fn sentences_are_never_empty() {
        for text in ["a. . b", "!!! ??? ...", ". x", "x .", "...\n\n..."] {
            for sentence in split_sentences(text) {
                assert!(!sentence.is_empty(), "empty sentence from {text:?}");
                assert_eq!(sentence, sentence.trim());
            }
        }
    }

    proptest! {
        #[test]
        fn split_sentences_yields_trimmed_non_empty(text in any::<String>()) {
            for sentence in split_sentences(&text) {
                prop_assert!(!sentence.is_empty());
                prop_assert_eq!(sentence.trim(), sentence.as_str());
            }
        }

        #[test]
        fn split_sentences_keeps_every_word(text in "[a-z.!? \n\t]{0,80}") {
            let joined = split_sentences(&text).join(" ");
            prop_assert_eq!(whitespace_word_count(&joined), whitespace_word_count(&text));
        }
    }

    #[test]
    fn extract_words_letters_only() {
        let words = extract_words("Hello, world! It's 42 o'clock_now.");
        assert_eq!(words, vec!["Hello", "world", "It", "s", "o", "clock", "now"]);
    }

    #[test]
    fn extract_words_empty() {
        assert!(extract_words("123 ... !!").is_empty());
    }

    #[test]
    fn whitespace_words() {
        assert_eq!(whitespace_word_count("  the  dog\tran "), 3);
        assert_eq!(whitespace_word_count(""), 0);
    }
}
