//! The sequence a player has to repeat: directions paired with colours.

use heapless::Vec;
use rand::{
    Rng,
    RngCore,
};

/// Longest sequence any configuration may ask for.
pub const SEQUENCE_CAPACITY: usize = 10;

/// A joystick direction.
///
/// `Neutral` only ever comes back from input sampling; it is never part of a
/// generated sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Neutral,
}

impl Direction {
    /// The four directions a sequence element can hold.
    pub const CARDINAL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn is_neutral(self) -> bool {
        matches!(self, Self::Neutral)
    }
}

/// One of the two palette colours, picked with the matching colour button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    One,
    Two,
}

impl From<bool> for Color {
    /// `true` selects colour one.
    fn from(first: bool) -> Self {
        if first { Self::One } else { Self::Two }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceElement {
    pub direction: Direction,
    pub color: Color,
}

impl SequenceElement {
    /// # Panics
    ///
    /// Panics if `direction` is [`Direction::Neutral`].
    pub const fn new(direction: Direction, color: Color) -> Self {
        assert!(!direction.is_neutral(), "sequence elements cannot be neutral");
        Self { direction, color }
    }

    fn random<R: RngCore>(rng: &mut R) -> Self {
        let direction = Direction::CARDINAL[rng.random_range(0..Direction::CARDINAL.len())];
        let color = Color::from(rng.random::<bool>());
        Self::new(direction, color)
    }
}

/// Fixed-capacity, ordered list of elements for one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    elements: Vec<SequenceElement, SEQUENCE_CAPACITY>,
}

impl Sequence {
    /// Draw `len` uniformly random elements.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds [`SEQUENCE_CAPACITY`].
    pub fn generate<R: RngCore>(len: usize, rng: &mut R) -> Self {
        assert!(len <= SEQUENCE_CAPACITY, "sequence longer than its capacity");
        Self {
            elements: (0..len).map(|_| SequenceElement::random(rng)).collect(),
        }
    }

    /// # Panics
    ///
    /// Panics if `elements` exceeds [`SEQUENCE_CAPACITY`].
    pub fn from_elements(elements: &[SequenceElement]) -> Self {
        assert!(
            elements.len() <= SEQUENCE_CAPACITY,
            "sequence longer than its capacity"
        );
        Self {
            elements: elements.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<SequenceElement> {
        self.elements.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = SequenceElement> + '_ {
        self.elements.iter().copied()
    }
}
