//! Numeric stat columns that threshold conditions can select.
//!
//! [`Field`] is a closed set. Names are resolved once, when a condition is
//! built, so evaluation never has to deal with a missing column.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::player::PlayerRecord;

/// A numeric column of a [`PlayerRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Goals scored.
    Goals,
    /// Assists made.
    Assists,
    /// Goals plus assists.
    Points,
}

impl Field {
    /// Every selectable field, in declaration order.
    pub const ALL: [Field; 3] = [Field::Goals, Field::Assists, Field::Points];

    /// Reads this column from a record.
    pub fn value_of(self, player: &PlayerRecord) -> u64 {
        match self {
            Field::Goals => u64::from(player.goals()),
            Field::Assists => u64::from(player.assists()),
            Field::Points => player.points(),
        }
    }

    /// Returns the lowercase name of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Goals => "goals",
            Field::Assists => "assists",
            Field::Points => "points",
        }
    }
}

impl FromStr for Field {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "goals" => Ok(Field::Goals),
            "assists" => Ok(Field::Assists),
            "points" => Ok(Field::Points),
            other => Err(QueryError::UnknownField(other.to_string())),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
