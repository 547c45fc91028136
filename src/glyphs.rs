//! 5×5 pixel-art glyphs: arrows, digits and a checkmark.
//!
//! Cells are `(col, row)` with row 0 at the top.

use crate::sequence::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    Arrow(Direction),
    Digit(u8),
    Checkmark,
}

type Glyph = &'static [(u8, u8)];

// ── Arrows ──────────────────────────────────────────────────────────────────

const ARROW_UP: Glyph = &[(2, 0), (1, 1), (3, 1), (2, 1), (2, 2), (2, 3), (2, 4)];
const ARROW_DOWN: Glyph = &[(2, 4), (1, 3), (3, 3), (2, 3), (2, 2), (2, 1), (2, 0)];
const ARROW_LEFT: Glyph = &[(0, 2), (1, 1), (1, 3), (1, 2), (2, 2), (3, 2), (4, 2)];
const ARROW_RIGHT: Glyph = &[(4, 2), (3, 1), (3, 3), (3, 2), (2, 2), (1, 2), (0, 2)];

// ── Digits ──────────────────────────────────────────────────────────────────

#[rustfmt::skip]
static DIGITS: [Glyph; 10] = [
    // 0
    &[
        (1, 0), (2, 0), (3, 0),
        (0, 1), (4, 1),
        (0, 2), (4, 2),
        (0, 3), (4, 3),
        (1, 4), (2, 4), (3, 4),
    ],
    // 1
    &[(2, 0), (1, 1), (2, 1), (2, 2), (2, 3), (2, 4)],
    // 2
    &[
        (1, 0), (2, 0), (3, 0),
        (4, 1),
        (3, 2),
        (2, 3),
        (0, 4), (1, 4), (2, 4), (3, 4),
    ],
    // 3
    &[
        (1, 0), (2, 0), (3, 0),
        (4, 1),
        (2, 2),
        (4, 3),
        (1, 4), (2, 4), (3, 4),
    ],
    // 4
    &[
        (0, 0), (4, 0),
        (0, 1), (4, 1),
        (0, 2), (1, 2), (2, 2), (3, 2), (4, 2),
        (4, 3),
        (4, 4),
    ],
    // 5
    &[
        (0, 0), (1, 0), (2, 0), (3, 0),
        (0, 1),
        (0, 2), (1, 2), (2, 2),
        (3, 3),
        (2, 4), (3, 4), (4, 4),
    ],
    // 6
    &[
        (1, 0), (2, 0), (3, 0),
        (0, 1),
        (0, 2), (1, 2), (2, 2),
        (0, 3),
        (0, 4), (1, 4), (2, 4), (3, 4),
    ],
    // 7
    &[
        (0, 0), (1, 0), (2, 0), (3, 0), (4, 0),
        (4, 1),
        (3, 2),
        (2, 3),
        (1, 4),
    ],
    // 8
    &[
        (1, 0), (2, 0), (3, 0),
        (0, 1), (4, 1),
        (0, 2), (1, 2), (2, 2), (3, 2), (4, 2),
        (0, 3), (4, 3),
        (1, 4), (2, 4), (3, 4),
    ],
    // 9
    &[
        (1, 0), (2, 0), (3, 0),
        (0, 1), (4, 1),
        (0, 2), (1, 2), (2, 2), (3, 2), (4, 2),
        (4, 3),
        (1, 4), (2, 4), (3, 4),
    ],
];

const CHECKMARK: Glyph = &[(0, 2), (1, 3), (2, 4), (3, 3), (4, 1)];

/// Cells lit by `symbol`.
///
/// # Panics
///
/// Panics for a neutral arrow or a digit above 9. Both mean the caller has a
/// bug; drawing nothing would hide it.
pub fn glyph_cells(symbol: Symbol) -> &'static [(u8, u8)] {
    match symbol {
        Symbol::Arrow(Direction::Up) => ARROW_UP,
        Symbol::Arrow(Direction::Down) => ARROW_DOWN,
        Symbol::Arrow(Direction::Left) => ARROW_LEFT,
        Symbol::Arrow(Direction::Right) => ARROW_RIGHT,
        Symbol::Arrow(Direction::Neutral) => panic!("no arrow glyph for a neutral direction"),
        Symbol::Digit(digit) => match DIGITS.get(usize::from(digit)) {
            Some(glyph) => *glyph,
            None => panic!("no glyph for digit {}", digit),
        },
        Symbol::Checkmark => CHECKMARK,
    }
}
