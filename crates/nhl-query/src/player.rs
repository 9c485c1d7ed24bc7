//! The player record being queried.

use serde::{Deserialize, Serialize};

/// One player's season line.
///
/// Records are immutable once built. `points` is computed from goals and
/// assists at construction and cannot be set independently, including when
/// deserializing: any incoming `points` value is ignored.
///
/// # Example
///
/// ```
/// use nhl_query::PlayerRecord;
///
/// let player = PlayerRecord::new("Gretzky", "EDM", "CAN", 35, 89);
/// assert_eq!(player.points(), 124);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PlayerRow")]
pub struct PlayerRecord {
    name: String,
    team: String,
    nationality: String,
    goals: u32,
    assists: u32,
    points: u64,
}

/// Wire shape of a record, without the derived column.
#[derive(Deserialize)]
struct PlayerRow {
    name: String,
    team: String,
    #[serde(default)]
    nationality: String,
    goals: u32,
    assists: u32,
}

impl From<PlayerRow> for PlayerRecord {
    fn from(row: PlayerRow) -> Self {
        PlayerRecord::new(row.name, row.team, row.nationality, row.goals, row.assists)
    }
}

impl PlayerRecord {
    /// Creates a record, deriving points as `goals + assists`.
    ///
    /// Points are held as `u64`, so the sum is exact for any counters.
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        nationality: impl Into<String>,
        goals: u32,
        assists: u32,
    ) -> Self {
        PlayerRecord {
            name: name.into(),
            team: team.into(),
            nationality: nationality.into(),
            goals,
            assists,
            points: u64::from(goals) + u64::from(assists),
        }
    }

    /// Player name as supplied by the provider.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Team code, e.g. `EDM`.
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Nationality code, e.g. `FIN`.
    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    /// Goals scored.
    pub fn goals(&self) -> u32 {
        self.goals
    }

    /// Assists made.
    pub fn assists(&self) -> u32 {
        self.assists
    }

    /// Goals plus assists.
    pub fn points(&self) -> u64 {
        self.points
    }
}

impl std::fmt::Display for PlayerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<20} {:<5} {:>3} + {:>3} = {:>3}",
            self.name, self.team, self.goals, self.assists, self.points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_derived() {
        let player = PlayerRecord::new("Semenko", "EDM", "CAN", 4, 12);
        assert_eq!(player.goals(), 4);
        assert_eq!(player.assists(), 12);
        assert_eq!(player.points(), 16);
    }

    #[test]
    fn points_exact_at_counter_limits() {
        let player = PlayerRecord::new("Big", "EDM", "FIN", u32::MAX, 1);
        assert_eq!(player.points(), 4_294_967_296);

        let player = PlayerRecord::new("Bigger", "EDM", "FIN", u32::MAX, u32::MAX);
        assert_eq!(player.points(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn accessors() {
        let player = PlayerRecord::new("Selanne", "WPG", "FIN", 76, 56);
        assert_eq!(player.name(), "Selanne");
        assert_eq!(player.team(), "WPG");
        assert_eq!(player.nationality(), "FIN");
    }

    #[test]
    fn display_is_aligned() {
        let player = PlayerRecord::new("Kurri", "EDM", "FIN", 37, 53);
        assert_eq!(
            player.to_string(),
            "Kurri                EDM    37 +  53 =  90"
        );
    }
}
