use crate::model::card::Card;
use crate::model::suit::SuitSet;
use core::fmt;
use std::ops::{Index, IndexMut};

/// Seats are relative to the human player of the orchestrator: `Me` is index 0
/// and turn order runs Me, Left, Opposite, Right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Seat {
    Me = 0,
    Left = 1,
    Opposite = 2,
    Right = 3,
}

impl Seat {
    pub const LOOP: [Seat; 4] = [Seat::Me, Seat::Left, Seat::Opposite, Seat::Right];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::Me),
            1 => Some(Seat::Left),
            2 => Some(Seat::Opposite),
            3 => Some(Seat::Right),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The seat `steps` places later in turn order.
    pub const fn after(self, steps: usize) -> Seat {
        match Seat::from_index((self.index() + steps) % 4) {
            Some(seat) => seat,
            None => self,
        }
    }

    /// Prefix of the per-seat command-line options (`--left_discarding`, ...).
    pub const fn option_prefix(self) -> &'static str {
        match self {
            Seat::Me => "my",
            Seat::Left => "left",
            Seat::Opposite => "opposite",
            Seat::Right => "right",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seat::Me => "Me",
            Seat::Left => "Left",
            Seat::Opposite => "Opposite",
            Seat::Right => "Right",
        };
        f.write_str(label)
    }
}

/// Exactly one value per seat, addressed by `Seat`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeatMap<T> {
    slots: [T; 4],
}

impl<T> SeatMap<T> {
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Seat) -> T,
    {
        Self {
            slots: Seat::LOOP.map(&mut f),
        }
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &T {
        &self.slots[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.slots[seat.index()]
    }
}

/// What the table knows about one seat during the current hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatState {
    /// Cards discarded by this seat so far, oldest first.
    pub discarding: Vec<Card>,
    /// Points taken in this hand.
    pub hand_score: u32,
    /// Points accumulated over the game.
    pub game_score: u32,
    /// Suits not yet proven void by a failure to follow.
    pub may_have: SuitSet,
}

impl Default for SeatState {
    fn default() -> Self {
        Self {
            discarding: Vec::new(),
            hand_score: 0,
            game_score: 0,
            may_have: SuitSet::ALL,
        }
    }
}
