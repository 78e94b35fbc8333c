//! Letter, word and sentence counters
//!
//! These produce the raw counts the readability formulas consume. Words are
//! runs of letters and digits; sentences are text segments closed by
//! terminal punctuation.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::{is_nfc, UnicodeNormalization};

use crate::lexicon::ComplexWordLexicon;

/// Letter/digit runs joined by internal hyphens or apostrophes
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:[-'’][\p{L}\p{N}]+)*").expect("word pattern is valid")
});

/// Compose `text` to NFC, borrowing when it already is
///
/// Decomposed accents (`u` + U+0301) would otherwise split words and hide
/// tonic vowels from the syllable scanner.
pub fn compose(text: &str) -> Cow<'_, str> {
    if is_nfc(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    }
}

/// Sentence-terminating punctuation
#[inline]
fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '…')
}

/// Count alphabetic characters
pub fn count_letters(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}

/// Iterate over the word tokens of `text`
///
/// `guarda-chuva` and `d'água` are single words; punctuation and whitespace
/// never belong to a word.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str())
}

/// Count word tokens
pub fn count_words(text: &str) -> usize {
    words(text).count()
}

/// Count sentences
///
/// A sentence is a segment closed by a run of `.`, `!`, `?` or `…`, or the
/// trailing segment of the text. Segments without any letter or digit are
/// not counted, so stray punctuation adds nothing. A dot between two digits
/// is a decimal separator, not a terminator.
pub fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut has_content = false;
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        let next = chars.peek().copied();

        if is_terminator(ch) && !is_decimal_dot(ch, prev, next) {
            if has_content {
                count += 1;
                has_content = false;
            }
        } else if ch.is_alphanumeric() {
            has_content = true;
        }

        prev = Some(ch);
    }

    if has_content {
        count += 1;
    }

    count
}

/// Check for `digit.digit`
fn is_decimal_dot(ch: char, prev: Option<char>, next: Option<char>) -> bool {
    ch == '.'
        && prev.is_some_and(|p| p.is_ascii_digit())
        && next.is_some_and(|n| n.is_ascii_digit())
}

/// Count the words `lexicon` flags as complex
pub fn count_complex_words<L>(text: &str, lexicon: &L) -> usize
where
    L: ComplexWordLexicon + ?Sized,
{
    words(text).filter(|w| lexicon.is_complex(w)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::WordBank;

    #[test]
    fn test_compose() {
        assert!(matches!(compose("saúde"), Cow::Borrowed("saúde")));
        assert_eq!(compose("sau\u{301}de"), "saúde");
        assert_eq!(count_words(&compose("sau\u{301}de")), 1);
    }

    #[test]
    fn test_count_letters() {
        assert_eq!(count_letters("Olá, mundo!"), 8);
        assert_eq!(count_letters("ação 123"), 4);
        assert_eq!(count_letters(""), 0);
    }

    #[test]
    fn test_words() {
        let tokens: Vec<_> = words("O guarda-chuva, d'água e 42 pães.").collect();
        assert_eq!(tokens, vec!["O", "guarda-chuva", "d'água", "e", "42", "pães"]);
    }

    #[test]
    fn test_count_words_ignores_punctuation() {
        assert_eq!(count_words("— Sim! -- não ..."), 2);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn test_count_sentences() {
        assert_eq!(count_sentences("A casa é bonita. O sol brilha."), 2);
        assert_eq!(count_sentences("Olá! Tudo bem? Sim"), 3);
        assert_eq!(count_sentences("Espere... Pronto."), 2);
        assert_eq!(count_sentences("Será?!"), 1);
    }

    #[test]
    fn test_count_sentences_without_content() {
        assert_eq!(count_sentences(""), 0);
        assert_eq!(count_sentences("... ?!"), 0);
    }

    #[test]
    fn test_decimal_dot_is_not_a_terminator() {
        assert_eq!(count_sentences("O valor subiu 3.5 pontos hoje."), 1);
    }

    #[test]
    fn test_count_complex_words() {
        let bank = WordBank::from_words(["inconstitucionalidade", "paralelepípedo"]);
        let text = "O paralelepípedo e a Inconstitucionalidade.";
        assert_eq!(count_complex_words(text, &bank), 2);
        assert_eq!(count_complex_words("casa azul", &bank), 0);
    }
}
