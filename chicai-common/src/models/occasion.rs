// File: chicai-common/src/models/occasion.rs

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// The context an outfit is put together for.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Occasion {
    Casual,
    Office,
    Party,
    #[serde(alias = "date")]
    DateNight,
    Wedding,
    Sport,
}

impl Occasion {
    /// Every occasion, in the order the picker shows them.
    pub const ALL: [Occasion; 6] = [
        Occasion::Casual,
        Occasion::Office,
        Occasion::Party,
        Occasion::DateNight,
        Occasion::Wedding,
        Occasion::Sport,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Occasion::Casual => "casual",
            Occasion::Office => "office",
            Occasion::Party => "party",
            Occasion::DateNight => "date-night",
            Occasion::Wedding => "wedding",
            Occasion::Sport => "sport",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Occasion::Casual => "Casual",
            Occasion::Office => "Office",
            Occasion::Party => "Party",
            Occasion::DateNight => "Date Night",
            Occasion::Wedding => "Wedding",
            Occasion::Sport => "Sport",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Occasion {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "casual" => Ok(Occasion::Casual),
            "office" => Ok(Occasion::Office),
            "party" => Ok(Occasion::Party),
            "date-night" | "date" | "datenight" => Ok(Occasion::DateNight),
            "wedding" => Ok(Occasion::Wedding),
            "sport" => Ok(Occasion::Sport),
            _ => Err(format!("Unknown occasion: {}", s)),
        }
    }
}
