pub mod bidder;

pub use bidder::{BotKind, RandomBidder};
