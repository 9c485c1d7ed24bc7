//! The source of player records.
//!
//! [`Statistics`](crate::Statistics) does not know where players come from.
//! Anything that can hand over the full record set once implements
//! [`PlayerProvider`]: an HTTP reader, a file parser, or a fixed list in tests.

use std::convert::Infallible;

use crate::player::PlayerRecord;

/// Supplies the complete, unfiltered set of players.
///
/// # Manual Implementation
///
/// ```
/// use nhl_query::{PlayerProvider, PlayerRecord};
///
/// struct CsvProvider {
///     text: String,
/// }
///
/// #[derive(Debug)]
/// struct BadRow(usize);
///
/// impl std::fmt::Display for BadRow {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "bad row {}", self.0)
///     }
/// }
///
/// impl std::error::Error for BadRow {}
///
/// impl PlayerProvider for CsvProvider {
///     type Error = BadRow;
///
///     fn get_players(&self) -> Result<Vec<PlayerRecord>, BadRow> {
///         self.text
///             .lines()
///             .enumerate()
///             .map(|(i, line)| {
///                 let cols: Vec<&str> = line.split(';').collect();
///                 match cols.as_slice() {
///                     [name, team, nat, goals, assists] => Ok(PlayerRecord::new(
///                         *name,
///                         *team,
///                         *nat,
///                         goals.parse().map_err(|_| BadRow(i))?,
///                         assists.parse().map_err(|_| BadRow(i))?,
///                     )),
///                     _ => Err(BadRow(i)),
///                 }
///             })
///             .collect()
///     }
/// }
///
/// let provider = CsvProvider { text: "Kurri;EDM;FIN;37;53".into() };
/// assert_eq!(provider.get_players().unwrap()[0].points(), 90);
/// ```
pub trait PlayerProvider {
    /// Failure reported when the records cannot be produced.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns every player, in source order.
    fn get_players(&self) -> Result<Vec<PlayerRecord>, Self::Error>;
}

/// A fixed list of players never fails.
impl PlayerProvider for Vec<PlayerRecord> {
    type Error = Infallible;

    fn get_players(&self) -> Result<Vec<PlayerRecord>, Infallible> {
        Ok(self.clone())
    }
}

impl PlayerProvider for [PlayerRecord] {
    type Error = Infallible;

    fn get_players(&self) -> Result<Vec<PlayerRecord>, Infallible> {
        Ok(self.to_vec())
    }
}

impl<P: PlayerProvider + ?Sized> PlayerProvider for &P {
    type Error = P::Error;

    fn get_players(&self) -> Result<Vec<PlayerRecord>, Self::Error> {
        (**self).get_players()
    }
}
