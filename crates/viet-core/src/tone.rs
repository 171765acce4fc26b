//! Vowel table and tone operations.
//!
//! `VOWELS` is laid out row-major: twelve contiguous six-entry runs, one run
//! per shape family (a ă â e ê i o ô ơ u ư y), each run listing the family's
//! letter under each [`Tone`] in enum order. A letter's position therefore
//! encodes both its family (`pos / 6`) and its tone (`pos % 6`), which makes
//! tone changes positional arithmetic and guarantees they never leave the
//! family run.

use std::collections::HashMap;
use std::sync::OnceLock;

/// The six Vietnamese pitch marks, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    None = 0,
    Grave = 1,
    Acute = 2,
    HookAbove = 3,
    Tilde = 4,
    DotBelow = 5,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::None,
        Tone::Grave,
        Tone::Acute,
        Tone::HookAbove,
        Tone::Tilde,
        Tone::DotBelow,
    ];
}

#[derive(Debug, thiserror::Error)]
#[error("invalid tone index: {0}")]
pub struct InvalidTone(pub u8);

impl TryFrom<u8> for Tone {
    type Error = InvalidTone;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tone::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidTone(value))
    }
}

/// One entry per `Tone`, so each family occupies one run of this length.
const RUN: usize = Tone::ALL.len();

/// Every toned Vietnamese vowel, lowercase, one six-entry run per family.
pub const VOWELS: [char; 72] = [
    'a', 'à', 'á', 'ả', 'ã', 'ạ', //
    'ă', 'ằ', 'ắ', 'ẳ', 'ẵ', 'ặ', //
    'â', 'ầ', 'ấ', 'ẩ', 'ẫ', 'ậ', //
    'e', 'è', 'é', 'ẻ', 'ẽ', 'ẹ', //
    'ê', 'ề', 'ế', 'ể', 'ễ', 'ệ', //
    'i', 'ì', 'í', 'ỉ', 'ĩ', 'ị', //
    'o', 'ò', 'ó', 'ỏ', 'õ', 'ọ', //
    'ô', 'ồ', 'ố', 'ổ', 'ỗ', 'ộ', //
    'ơ', 'ờ', 'ớ', 'ở', 'ỡ', 'ợ', //
    'u', 'ù', 'ú', 'ủ', 'ũ', 'ụ', //
    'ư', 'ừ', 'ứ', 'ử', 'ữ', 'ự', //
    'y', 'ỳ', 'ý', 'ỷ', 'ỹ', 'ỵ', //
];

fn vowel_index() -> &'static HashMap<char, usize> {
    static INDEX: OnceLock<HashMap<char, usize>> = OnceLock::new();
    INDEX.get_or_init(|| VOWELS.iter().enumerate().map(|(i, &c)| (c, i)).collect())
}

/// Position of `c` in the vowel table, or `None` if `c` is not a vowel.
pub fn position_of(c: char) -> Option<usize> {
    vowel_index().get(&c).copied()
}

/// Tone carried by `c`.
///
/// Returns `Tone::None` both for a toneless vowel and for a non-vowel;
/// use [`is_vowel`] when the distinction matters.
pub fn tone_of(c: char) -> Tone {
    match position_of(c) {
        Some(pos) => Tone::ALL[pos % RUN],
        None => Tone::None,
    }
}

/// Replace the tone of `c`, keeping its shape family.
/// Non-vowels pass through unchanged.
pub fn with_tone(c: char, tone: Tone) -> char {
    match position_of(c) {
        Some(pos) => VOWELS[pos - pos % RUN + tone as usize],
        None => c,
    }
}

pub fn is_vowel(c: char) -> bool {
    vowel_index().contains_key(&c)
}

pub fn has_vowel(s: &str) -> bool {
    s.chars().any(is_vowel)
}
