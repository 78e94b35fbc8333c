//! Grapheme tables for Portuguese vowel clusters
//!
//! All tables are immutable and allocation-free during lookup. Clusters are
//! stored as fixed-size char arrays so a window of the scanned text can be
//! compared directly without building intermediate strings.

/// Two-grapheme vowel sequences pronounced as a single nucleus
pub const DIPHTHONGS: [[char; 2]; 20] = [
    ['a', 'i'],
    ['a', 'u'],
    ['e', 'i'],
    ['e', 'u'],
    ['é', 'u'],
    ['i', 'u'],
    ['o', 'i'],
    ['ó', 'i'],
    ['o', 'u'],
    ['u', 'i'],
    ['i', 'a'],
    ['i', 'e'],
    ['i', 'o'],
    ['u', 'a'],
    ['u', 'e'],
    ['u', 'o'],
    ['ũ', 'i'],
    ['ã', 'e'],
    ['ã', 'o'],
    ['õ', 'e'],
];

/// Three-grapheme vowel sequences pronounced as a single nucleus
pub const TRIPHTHONGS: [[char; 3]; 6] = [
    ['u', 'a', 'i'],
    ['u', 'e', 'i'],
    ['u', 'ã', 'o'],
    ['u', 'õ', 'e'],
    ['u', 'i', 'u'],
    ['u', 'o', 'u'],
];

/// Two-grapheme sequences split into two nuclei
///
/// Takes precedence over [`DIPHTHONGS`]: a tonic í/ú after another vowel, or
/// a doubled vowel.
pub const HIATUSES: [[char; 2]; 11] = [
    ['a', 'í'],
    ['a', 'ú'],
    ['e', 'í'],
    ['e', 'ú'],
    ['o', 'í'],
    ['u', 'í'],
    ['a', 'a'],
    ['e', 'e'],
    ['i', 'i'],
    ['o', 'o'],
    ['u', 'u'],
];

/// Check if a lower-cased character is a Portuguese vowel grapheme - hot path
#[inline]
pub fn is_vowel(ch: char) -> bool {
    matches!(
        ch,
        'a' | 'ã' | 'â' | 'á' | 'à'
            | 'e' | 'é' | 'ê' | 'è'
            | 'i' | 'í' | 'ì' | 'î'
            | 'o' | 'õ' | 'ô' | 'ó' | 'ò'
            | 'u' | 'ú' | 'ù' | 'û' | 'ü'
    )
}

/// Stressed high vowels that break a vowel pair into two nuclei
#[inline]
pub fn is_tonic(ch: char) -> bool {
    matches!(ch, 'í' | 'ú')
}

/// Check if a three-character window is a cataloged triphthong
#[inline]
pub fn is_triphthong(window: [char; 3]) -> bool {
    TRIPHTHONGS.contains(&window)
}

/// Check if a two-character window is a cataloged diphthong
#[inline]
pub fn is_diphthong(pair: [char; 2]) -> bool {
    DIPHTHONGS.contains(&pair)
}

/// Check if a two-character window is a cataloged hiatus
#[inline]
pub fn is_hiatus(pair: [char; 2]) -> bool {
    HIATUSES.contains(&pair)
}
