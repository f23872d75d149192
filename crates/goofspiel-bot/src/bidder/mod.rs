mod random;

pub use random::RandomBidder;

use core::fmt;
use core::str::FromStr;
use goofspiel_core::game::strategy::BidStrategy;
use goofspiel_core::model::random::SeededRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BotKind {
    #[default]
    Random,
}

impl BotKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            BotKind::Random => "random",
        }
    }

    /// Builds the strategy; a seed makes its choices reproducible.
    pub fn build(self, seed: Option<u64>) -> Box<dyn BidStrategy> {
        match self {
            BotKind::Random => Box::new(RandomBidder::new(SeededRandom::from_optional_seed(seed))),
        }
    }
}

impl FromStr for BotKind {
    type Err = UnknownBotKind;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "random" | "easy" | "default" => Ok(BotKind::Random),
            other => Err(UnknownBotKind(other.to_string())),
        }
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBotKind(pub String);

impl fmt::Display for UnknownBotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown bot kind '{}'; valid kinds: random", self.0)
    }
}

impl std::error::Error for UnknownBotKind {}

#[cfg(test)]
mod tests {
    use super::BotKind;

    #[test]
    fn parses_aliases() {
        assert_eq!("random".parse::<BotKind>(), Ok(BotKind::Random));
        assert_eq!(" Easy ".parse::<BotKind>(), Ok(BotKind::Random));
        assert!("clairvoyant".parse::<BotKind>().is_err());
    }

    #[test]
    fn builds_labelled_strategy() {
        let bot = BotKind::default().build(Some(3));
        assert_eq!(bot.label(), "random");
        assert_eq!(BotKind::Random.to_string(), "random");
    }
}
