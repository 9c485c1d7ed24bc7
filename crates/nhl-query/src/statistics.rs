//! The query service over a loaded player set.

use crate::error::{QueryError, Result};
use crate::matcher::Matcher;
use crate::ordering::OrderBy;
use crate::player::PlayerRecord;
use crate::provider::PlayerProvider;

/// Holds one load of players and answers queries against it.
///
/// The record set is pulled from the provider once, at construction, and
/// never changes afterwards. Every query is a linear scan that preserves
/// load order unless it explicitly ranks the results.
///
/// # Example
///
/// ```
/// use nhl_query::{Matcher, PlayerRecord, Statistics};
///
/// let players = vec![
///     PlayerRecord::new("Semenko", "EDM", "CAN", 4, 12),
///     PlayerRecord::new("Lemieux", "PIT", "CAN", 45, 54),
///     PlayerRecord::new("Kurri", "EDM", "FIN", 37, 53),
/// ];
///
/// let stats = Statistics::new(&players)?;
/// let oilers: Vec<&str> = stats
///     .matches(&Matcher::plays_in("EDM"))
///     .iter()
///     .map(|p| p.name())
///     .collect();
///
/// assert_eq!(oilers, ["Semenko", "Kurri"]);
/// # Ok::<(), nhl_query::QueryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Statistics {
    players: Vec<PlayerRecord>,
}

impl Statistics {
    /// Loads every player from `provider`.
    ///
    /// A provider failure is returned as [`QueryError::ProviderFailure`]
    /// with the original error as its source. Nothing is retried.
    pub fn new<P>(provider: &P) -> Result<Self>
    where
        P: PlayerProvider + ?Sized,
    {
        let players = provider.get_players().map_err(|err| {
            log::warn!("player provider failed: {}", err);
            QueryError::ProviderFailure(Box::new(err))
        })?;

        log::debug!("loaded {} players", players.len());
        Ok(Statistics { players })
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Returns the players that satisfy `matcher`, in load order.
    pub fn matches(&self, matcher: &Matcher) -> Vec<&PlayerRecord> {
        let results: Vec<&PlayerRecord> = self
            .players
            .iter()
            .filter(|player| matcher.matches(player))
            .collect();

        log::debug!(
            "{} ({} nodes) matched {} of {} players",
            matcher,
            matcher.size(),
            results.len(),
            self.players.len()
        );
        results
    }

    /// Counts the players that satisfy `matcher`.
    pub fn count(&self, matcher: &Matcher) -> usize {
        let count = self
            .players
            .iter()
            .filter(|player| matcher.matches(player))
            .count();

        log::debug!(
            "{} ({} nodes) counted {} of {} players",
            matcher,
            matcher.size(),
            count,
            self.players.len()
        );
        count
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Finds the first player whose name contains `name`.
    pub fn search(&self, name: &str) -> Option<&PlayerRecord> {
        self.players
            .iter()
            .find(|player| player.name().contains(name))
    }

    /// Returns the players of one team, in load order.
    pub fn team(&self, team: &str) -> Vec<&PlayerRecord> {
        self.matches(&Matcher::plays_in(team))
    }

    /// Returns the `how_many` best players under `order`.
    ///
    /// Ties keep load order.
    pub fn top(&self, how_many: usize, order: OrderBy) -> Vec<&PlayerRecord> {
        let mut ranked: Vec<&PlayerRecord> = self.players.iter().collect();
        ranked.sort_by(|a, b| order.compare(a, b));
        ranked.truncate(how_many);
        ranked
    }

    /// Returns the players of one nationality, most points first.
    pub fn top_scorers_by_nationality(&self, nationality: &str) -> Vec<&PlayerRecord> {
        let order = OrderBy::default();
        let mut ranked: Vec<&PlayerRecord> = self
            .players
            .iter()
            .filter(|player| player.nationality() == nationality)
            .collect();
        ranked.sort_by(|a, b| order.compare(a, b));
        ranked
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Every loaded player, in load order.
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Number of loaded players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns `true` if the provider supplied no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
