//! Shape-mark families and the mark transform composite.
//!
//! Marks are defined on tone-neutral letters only; [`apply_mark`] strips the
//! tone, swaps the shape, and puts the tone back, so the two axes never
//! interfere.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::tone::{tone_of, with_tone, Tone};

/// Shape modifiers a base letter may carry, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Plain = 0,
    Circumflex = 1,
    Breve = 2,
    Horn = 3,
    Stroke = 4,
}

impl Mark {
    pub const ALL: [Mark; 5] = [
        Mark::Plain,
        Mark::Circumflex,
        Mark::Breve,
        Mark::Horn,
        Mark::Stroke,
    ];
}

#[derive(Debug, thiserror::Error)]
#[error("invalid mark index: {0}")]
pub struct InvalidMark(pub u8);

impl TryFrom<u8> for Mark {
    type Error = InvalidMark;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Mark::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidMark(value))
    }
}

/// The letters one base shape becomes under each [`Mark`].
///
/// `plain` is the family's unmarked representative and always exists; the
/// other slots exist only where Vietnamese has the letter.
#[derive(Debug, PartialEq, Eq)]
pub struct MarkFamily {
    plain: char,
    circumflex: Option<char>,
    breve: Option<char>,
    horn: Option<char>,
    stroke: Option<char>,
}

impl MarkFamily {
    /// Letter in the given slot, if the language has it.
    pub fn get(&self, mark: Mark) -> Option<char> {
        match mark {
            Mark::Plain => Some(self.plain),
            Mark::Circumflex => self.circumflex,
            Mark::Breve => self.breve,
            Mark::Horn => self.horn,
            Mark::Stroke => self.stroke,
        }
    }

    pub fn plain(&self) -> char {
        self.plain
    }

    /// Slot that `c` itself occupies in this family.
    pub fn mark_of(&self, c: char) -> Option<Mark> {
        Mark::ALL.into_iter().find(|&m| self.get(m) == Some(c))
    }
}

static FAMILIES: [MarkFamily; 5] = [
    MarkFamily {
        plain: 'a',
        circumflex: Some('â'),
        breve: Some('ă'),
        horn: None,
        stroke: None,
    },
    MarkFamily {
        plain: 'e',
        circumflex: Some('ê'),
        breve: None,
        horn: None,
        stroke: None,
    },
    MarkFamily {
        plain: 'o',
        circumflex: Some('ô'),
        breve: None,
        horn: Some('ơ'),
        stroke: None,
    },
    MarkFamily {
        plain: 'u',
        circumflex: None,
        breve: None,
        horn: Some('ư'),
        stroke: None,
    },
    MarkFamily {
        plain: 'd',
        circumflex: None,
        breve: None,
        horn: None,
        stroke: Some('đ'),
    },
];

fn family_index() -> &'static HashMap<char, &'static MarkFamily> {
    static INDEX: OnceLock<HashMap<char, &'static MarkFamily>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = HashMap::new();
        for family in &FAMILIES {
            for mark in Mark::ALL {
                if let Some(member) = family.get(mark) {
                    map.insert(member, family);
                }
            }
        }
        map
    })
}

/// Family record for a tone-neutral letter.
///
/// Every member of a family resolves to the same record, so the family is
/// recoverable from any of its letters. Toned letters have no family; strip
/// the tone first (see [`apply_mark`]).
pub fn family_of(c: char) -> Option<&'static MarkFamily> {
    family_index().get(&c).copied()
}

/// Mark carried by the tone-neutral letter `c`, or `None` if `c` belongs to
/// no family.
pub fn mark_of(c: char) -> Option<Mark> {
    family_of(c).and_then(|family| family.mark_of(c))
}

/// Unmarked representative of `c`'s family; identity when `c` has no family.
pub fn strip_mark(c: char) -> char {
    family_of(c).map_or(c, MarkFamily::plain)
}

/// Re-shape `c` with `mark`, preserving its tone.
///
/// Returns `None` when no such letter exists, either because `c`'s
/// tone-neutral form belongs to no family or because the family has no
/// letter in the requested slot (e.g. a horned `e`). Callers must not
/// render anything in that case.
pub fn apply_mark(c: char, mark: Mark) -> Option<char> {
    let tone = tone_of(c);
    let base = with_tone(c, Tone::None);
    let Some(family) = family_of(base) else {
        debug!(%base, ?mark, "no mark family");
        return None;
    };
    let Some(marked) = family.get(mark) else {
        debug!(%base, ?mark, "mark not defined for family");
        return None;
    };
    Some(with_tone(marked, tone))
}
