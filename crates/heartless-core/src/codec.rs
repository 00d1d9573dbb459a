//! Text encoding shared with the orchestrator.
//!
//! A card is two characters, rank then suit (`Qs`, `0h`, `2c`). Several cards
//! travel as a packed string where each suit letter closes the run of ranks in
//! front of it, so `467QAc480d` holds five clubs and three diamonds. Per-card
//! strings such as `2c3d4s` are a special case of the packed form.

use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::{Suit, SuitSet};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid cards string \"{token}\": unexpected '{character}' at offset {offset}")]
    InvalidCharacter {
        token: String,
        character: char,
        offset: usize,
    },
    #[error("invalid cards string \"{token}\": rank '{character}' at offset {offset} has no suit")]
    MissingSuit {
        token: String,
        character: char,
        offset: usize,
    },
    #[error("invalid suit \"{token}\"")]
    InvalidSuit { token: String },
    #[error("expected at most one card in \"{token}\" but found {count}")]
    NotSingleCard { token: String, count: usize },
    #[error("invalid card: rank {rank} of suit {suit}")]
    InvalidCard { rank: u8, suit: Suit },
}

impl CodecError {
    /// True for failures caused by malformed text, false for unencodable cards.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, CodecError::InvalidCard { .. })
    }
}

/// Decodes a packed cards string, scanning from the end so that each suit
/// letter applies to the ranks written before it. Cards come back in the
/// order they appear in `token`.
pub fn decode_cards(token: &str) -> Result<Vec<Card>, CodecError> {
    let mut cards = Vec::new();
    let mut suit = None;

    for (offset, character) in token.char_indices().rev() {
        if let Some(next) = Suit::from_char(character) {
            suit = Some(next);
            continue;
        }
        let Some(rank) = Rank::from_char(character) else {
            return Err(CodecError::InvalidCharacter {
                token: token.to_string(),
                character,
                offset,
            });
        };
        let Some(suit) = suit else {
            return Err(CodecError::MissingSuit {
                token: token.to_string(),
                character,
                offset,
            });
        };
        cards.push(Card::new(rank, suit));
    }

    cards.reverse();
    Ok(cards)
}

/// Decodes a string holding zero or one card.
pub fn decode_single_card(token: &str) -> Result<Option<Card>, CodecError> {
    let cards = decode_cards(token)?;
    match cards.as_slice() {
        [] => Ok(None),
        [card] => Ok(Some(*card)),
        _ => Err(CodecError::NotSingleCard {
            token: token.to_string(),
            count: cards.len(),
        }),
    }
}

/// Suits whose letters appear anywhere in `token`, clubs first. Other
/// characters are ignored.
pub fn decode_suits(token: &str) -> Vec<Suit> {
    Suit::ALL
        .into_iter()
        .filter(|suit| token.contains(suit.to_char()))
        .collect()
}

pub fn decode_suit_set(token: &str) -> SuitSet {
    decode_suits(token).into_iter().collect()
}

/// Parses `--suit_to_follow`: a suit name (`spade`), a suit letter (`s`), or
/// the empty string when there is nothing to follow.
pub fn decode_suit_name(token: &str) -> Result<Option<Suit>, CodecError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let mut chars = trimmed.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(ch), None) => Suit::from_char(ch),
        _ => None,
    };
    letter
        .or_else(|| Suit::from_name(trimmed))
        .map(Some)
        .ok_or_else(|| CodecError::InvalidSuit {
            token: token.to_string(),
        })
}

pub fn encode_card(card: Card) -> String {
    let mut token = String::with_capacity(2);
    token.push(card.rank.to_char());
    token.push(card.suit.to_char());
    token
}

pub fn encode_cards(cards: &[Card]) -> String {
    cards.iter().copied().map(encode_card).collect()
}

pub fn encode_suits(suits: SuitSet) -> String {
    suits.iter().map(Suit::to_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn packed_string_assigns_trailing_suit() {
        let cards = decode_cards("467QAc480d").unwrap();
        assert_eq!(
            cards,
            vec![
                card(Rank::Four, Suit::Clubs),
                card(Rank::Six, Suit::Clubs),
                card(Rank::Seven, Suit::Clubs),
                card(Rank::Queen, Suit::Clubs),
                card(Rank::Ace, Suit::Clubs),
                card(Rank::Four, Suit::Diamonds),
                card(Rank::Eight, Suit::Diamonds),
                card(Rank::Ten, Suit::Diamonds),
            ]
        );
    }

    #[test]
    fn per_card_tokens_roundtrip_in_order() {
        let token = "2c0dQsAhJc9s";
        let cards = decode_cards(token).unwrap();
        assert_eq!(cards.len(), 6);
        assert_eq!(encode_cards(&cards), token);
    }

    #[test]
    fn empty_token_has_no_cards() {
        assert!(decode_cards("").unwrap().is_empty());
        assert_eq!(decode_single_card("").unwrap(), None);
    }

    #[test]
    fn suit_without_ranks_contributes_nothing() {
        let cards = decode_cards("c2d").unwrap();
        assert_eq!(cards, vec![card(Rank::Two, Suit::Diamonds)]);
    }

    #[test]
    fn unknown_character_is_rejected_with_offset() {
        let err = decode_cards("2x").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidCharacter {
                token: "2x".into(),
                character: 'x',
                offset: 1
            }
        );
        assert!(err.is_invalid_input());
        assert!(decode_cards("2c 3d").is_err());
        assert!(decode_cards("qs").is_err());
    }

    #[test]
    fn rank_without_suit_is_rejected() {
        let err = decode_cards("2cQ").unwrap_err();
        assert!(matches!(
            err,
            CodecError::MissingSuit {
                character: 'Q',
                offset: 2,
                ..
            }
        ));
    }

    #[test]
    fn single_card_rejects_several() {
        assert_eq!(
            decode_single_card("Ks").unwrap(),
            Some(card(Rank::King, Suit::Spades))
        );
        assert!(matches!(
            decode_single_card("KAs"),
            Err(CodecError::NotSingleCard { count: 2, .. })
        ));
    }

    #[test]
    fn suits_come_back_in_fixed_order() {
        assert_eq!(decode_suits("hsdc"), Suit::ALL.to_vec());
        assert_eq!(decode_suits("hc"), vec![Suit::Clubs, Suit::Hearts]);
        assert!(decode_suits("").is_empty());
        assert_eq!(encode_suits(decode_suit_set("sh")), "sh");
    }

    #[test]
    fn suit_names_and_letters() {
        assert_eq!(decode_suit_name("spade").unwrap(), Some(Suit::Spades));
        assert_eq!(decode_suit_name("h").unwrap(), Some(Suit::Hearts));
        assert_eq!(decode_suit_name("").unwrap(), None);
        assert!(matches!(
            decode_suit_name("trump"),
            Err(CodecError::InvalidSuit { .. })
        ));
    }

    #[test]
    fn encode_uses_zero_for_ten() {
        assert_eq!(encode_card(card(Rank::Ten, Suit::Hearts)), "0h");
        assert_eq!(encode_card(Card::QUEEN_OF_SPADES), "Qs");
    }

    #[test]
    fn invalid_card_is_not_an_input_error() {
        let err = Card::from_value(1, Suit::Clubs).unwrap_err();
        assert!(!err.is_invalid_input());
    }
}
