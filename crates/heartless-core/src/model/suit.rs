use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Spades = 2,
    Hearts = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            's' => Some(Suit::Spades),
            'h' => Some(Suit::Hearts),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Spades => 's',
            Suit::Hearts => 'h',
        }
    }

    /// Singular name used by the orchestrator for `--suit_to_follow`.
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "club",
            Suit::Diamonds => "diamond",
            Suit::Spades => "spade",
            Suit::Hearts => "heart",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Suit::ALL.into_iter().find(|suit| suit.name() == name)
    }

    pub const fn is_heart(self) -> bool {
        matches!(self, Suit::Hearts)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Bit-mask of suits a seat may still hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SuitSet(u8);

impl SuitSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(0b1111);

    pub fn contains(self, suit: Suit) -> bool {
        let bit = 1 << suit as u8;
        self.0 & bit != 0
    }

    pub fn with(mut self, suit: Suit) -> Self {
        let bit = 1 << suit as u8;
        self.0 |= bit;
        self
    }

    pub fn without(mut self, suit: Suit) -> Self {
        let bit = 1 << suit as u8;
        self.0 &= !bit;
        self
    }

    pub fn iter(self) -> impl Iterator<Item = Suit> {
        Suit::ALL.into_iter().filter(move |suit| self.contains(*suit))
    }
}

impl FromIterator<Suit> for SuitSet {
    fn from_iter<I: IntoIterator<Item = Suit>>(iter: I) -> Self {
        iter.into_iter().fold(SuitSet::EMPTY, SuitSet::with)
    }
}

impl fmt::Display for SuitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for suit in self.iter() {
            write!(f, "{}", suit.to_char())?;
        }
        Ok(())
    }
}
