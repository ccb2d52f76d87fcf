//! Boarding strategies.

use std::fmt;
use std::str::FromStr;

use crate::SeatingError;

/// How the assigned roster is ordered for boarding.  Fixed for one run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum BoardingStrategy {
    /// Lowest row first.
    #[default]
    FrontToBack,
    /// Highest row first.
    BackToFront,
    /// Uniform random permutation.
    Random,
}

impl BoardingStrategy {
    pub const ALL: [BoardingStrategy; 3] = [
        BoardingStrategy::FrontToBack,
        BoardingStrategy::BackToFront,
        BoardingStrategy::Random,
    ];

    /// Short human-readable name, as shown on the boarding page.
    pub fn label(self) -> &'static str {
        match self {
            BoardingStrategy::FrontToBack => "Front-2-Back",
            BoardingStrategy::BackToFront => "Back-2-Front",
            BoardingStrategy::Random      => "Random",
        }
    }

    /// Key stored by the settings layer (`FRONT2BACK`, `BACK2FRONT`, `RANDOM`).
    pub fn setting_key(self) -> &'static str {
        match self {
            BoardingStrategy::FrontToBack => "FRONT2BACK",
            BoardingStrategy::BackToFront => "BACK2FRONT",
            BoardingStrategy::Random      => "RANDOM",
        }
    }
}

impl fmt::Display for BoardingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the settings keys and the common spellings
/// (`front-to-back`, `Front_2_Back`, `random`, …), case-insensitively.
impl FromStr for BoardingStrategy {
    type Err = SeatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_uppercase)
            .collect();
        match key.as_str() {
            "FRONT2BACK" | "FRONTTOBACK" | "F2B" => Ok(BoardingStrategy::FrontToBack),
            "BACK2FRONT" | "BACKTOFRONT" | "B2F" => Ok(BoardingStrategy::BackToFront),
            "RANDOM"                             => Ok(BoardingStrategy::Random),
            _ => Err(SeatingError::UnknownStrategy(s.to_owned())),
        }
    }
}
