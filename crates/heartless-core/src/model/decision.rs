use crate::codec::{encode_card, encode_cards};
use crate::model::card::Card;
use core::fmt;

/// The single answer printed for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Pass([Card; 3]),
    Play(Card),
}

impl Decision {
    pub fn cards(&self) -> &[Card] {
        match self {
            Decision::Pass(cards) => cards,
            Decision::Play(card) => std::slice::from_ref(card),
        }
    }
}

/// Renders the exact stdout line: three tokens for a pass, one for a play.
impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Pass(cards) => f.write_str(&encode_cards(cards)),
            Decision::Play(card) => f.write_str(&encode_card(*card)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Decision;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn pass_line_concatenates_three_tokens() {
        let decision = Decision::Pass([
            Card::QUEEN_OF_SPADES,
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Diamonds),
        ]);
        assert_eq!(decision.to_string(), "QsAh0d");
        assert_eq!(decision.cards().len(), 3);
    }

    #[test]
    fn play_line_is_one_token() {
        assert_eq!(Decision::Play(Card::TWO_OF_CLUBS).to_string(), "2c");
    }
}
