pub mod card;
pub mod decision;
pub mod hand;
pub mod player;
pub mod rank;
pub mod round;
pub mod suit;
