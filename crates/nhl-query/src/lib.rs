//! NHL Query - Composable matchers for filtering player statistics.
//!
//! The crate filters a season's worth of [`PlayerRecord`]s with boolean
//! criteria built from a small, fixed vocabulary:
//!
//! - Leaf conditions: team membership, `>=` and `<` thresholds on goals,
//!   assists or points
//! - Combinators: `All`, `Not`, `And`, `Or`, nestable to any depth
//! - A fluent [`QueryBuilder`] that chains conditions without manual nesting
//! - A [`Statistics`] service that loads players once and runs queries
//!
//! # Quick Start
//!
//! ```rust
//! use nhl_query::{Matcher, PlayerRecord, QueryBuilder, Statistics};
//!
//! let players = vec![
//!     PlayerRecord::new("Semenko", "EDM", "CAN", 4, 12),
//!     PlayerRecord::new("Lemieux", "PIT", "CAN", 45, 54),
//!     PlayerRecord::new("Kurri", "EDM", "FIN", 37, 53),
//! ];
//! let stats = Statistics::new(&players)?;
//!
//! // Hand-built tree
//! let matcher = Matcher::and([
//!     Matcher::has_at_least(10, "points")?,
//!     Matcher::plays_in("EDM"),
//! ]);
//! assert_eq!(stats.matches(&matcher).len(), 2);
//!
//! // Same thing through the builder
//! let built = QueryBuilder::new()
//!     .has_at_least(10, "points")?
//!     .plays_in("EDM")
//!     .build();
//! assert_eq!(built, matcher);
//! # Ok::<(), nhl_query::QueryError>(())
//! ```
//!
//! # Builder Semantics
//!
//! A builder chain is a conjunction:
//!
//! ```text
//! build() = All                  (no conditions)
//!         | c                    (exactly one condition)
//!         | And(c1, c2, ..., cn) (two or more, in call order)
//! ```
//!
//! `one_of(chains)` produces `Or(build(chain1), ..., build(chainN))`. The
//! builder it is called on is only a factory; its own conditions are not
//! part of the result.
//!
//! # Errors
//!
//! Field names are checked when a threshold condition is created. An unknown
//! name fails right there with [`QueryError::UnknownField`], so a built
//! matcher always evaluates. Provider errors surface from
//! [`Statistics::new`] as [`QueryError::ProviderFailure`].

mod builder;
mod error;
mod field;
mod matcher;
mod ordering;
mod player;
mod provider;
mod statistics;

// Re-export public API
pub use builder::QueryBuilder;
pub use error::{QueryError, Result};
pub use field::Field;
pub use matcher::Matcher;
pub use ordering::{Dir, OrderBy};
pub use player::PlayerRecord;
pub use provider::PlayerProvider;
pub use statistics::Statistics;
