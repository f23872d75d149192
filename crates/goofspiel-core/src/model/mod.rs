pub mod card;
pub mod deck;
pub mod hand;
pub mod player;
pub mod prize;
pub mod random;
