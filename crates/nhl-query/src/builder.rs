//! Fluent construction of matchers.
//!
//! [`QueryBuilder`] accumulates a chain of leaf conditions that is read as a
//! conjunction. [`QueryBuilder::build`] turns the chain into a [`Matcher`],
//! and [`QueryBuilder::one_of`] ORs whole chains together.

use crate::error::Result;
use crate::field::Field;
use crate::matcher::Matcher;

/// Builds a [`Matcher`] without nesting combinators by hand.
///
/// Each condition method appends one leaf to the chain and returns the
/// builder. Builders are plain values: clone one to branch a chain.
///
/// # Example
///
/// ```
/// use nhl_query::{PlayerRecord, QueryBuilder};
///
/// let query = QueryBuilder::new();
/// let matcher = query
///     .one_of([
///         query.clone()
///             .plays_in("PHI")
///             .has_at_least(10, "assists")?
///             .has_fewer_than(10, "goals")?,
///         query.clone()
///             .plays_in("EDM")
///             .has_at_least(50, "points")?,
///     ])
///     .build();
///
/// let player = PlayerRecord::new("Konecny", "PHI", "CAN", 8, 22);
/// assert!(matcher.matches(&player));
/// # Ok::<(), nhl_query::QueryError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    conditions: Vec<Matcher>,
}

impl QueryBuilder {
    /// Creates an empty builder.
    ///
    /// An empty builder builds [`Matcher::All`].
    pub fn new() -> Self {
        QueryBuilder::default()
    }

    // ========================================================================
    // Conditions
    // ========================================================================

    /// Appends an arbitrary matcher to the chain.
    pub fn and(mut self, matcher: impl Into<Matcher>) -> Self {
        self.conditions.push(matcher.into());
        self
    }

    /// Appends a team membership condition.
    pub fn plays_in(self, team: impl Into<String>) -> Self {
        self.and(Matcher::plays_in(team))
    }

    /// Appends a `field >= threshold` condition.
    ///
    /// Returns an error if `field` is not a known stat column.
    pub fn has_at_least(self, threshold: i64, field: &str) -> Result<Self> {
        let matcher = Matcher::has_at_least(threshold, field)?;
        Ok(self.and(matcher))
    }

    /// Appends a `field < threshold` condition.
    ///
    /// Returns an error if `field` is not a known stat column.
    pub fn has_fewer_than(self, threshold: i64, field: &str) -> Result<Self> {
        let matcher = Matcher::has_fewer_than(threshold, field)?;
        Ok(self.and(matcher))
    }

    /// Appends a `field >= threshold` condition for an already-resolved field.
    pub fn has_at_least_in(self, threshold: i64, field: Field) -> Self {
        self.and(Matcher::HasAtLeast { threshold, field })
    }

    /// Appends a `field < threshold` condition for an already-resolved field.
    pub fn has_fewer_than_in(self, threshold: i64, field: Field) -> Self {
        self.and(Matcher::HasFewerThan { threshold, field })
    }

    // ========================================================================
    // Combination
    // ========================================================================

    /// Combines independently built chains into a disjunction.
    ///
    /// Each chain is finalized as if by [`build`](Self::build) and the results
    /// become the children of one [`Matcher::Or`], in the given order. The
    /// returned builder holds only that `Or`, so building it yields the `Or`
    /// itself.
    ///
    /// The receiver acts as a factory: conditions already accumulated on it
    /// are *not* folded into the result and the receiver is left untouched.
    /// To require them as well, chain them onto the result or wrap both in
    /// [`Matcher::and`].
    pub fn one_of<I>(&self, chains: I) -> QueryBuilder
    where
        I: IntoIterator,
        I::Item: Into<Matcher>,
    {
        QueryBuilder {
            conditions: vec![Matcher::or(chains)],
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Finalizes the chain into a matcher.
    ///
    /// - no conditions: [`Matcher::All`]
    /// - one condition: that condition, unwrapped
    /// - otherwise: [`Matcher::And`] over the conditions in insertion order
    pub fn build(self) -> Matcher {
        let mut conditions = self.conditions;
        match conditions.len() {
            0 => Matcher::All,
            1 => conditions.remove(0),
            _ => Matcher::And(conditions),
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the conditions accumulated so far.
    pub fn conditions(&self) -> &[Matcher] {
        &self.conditions
    }

    /// Returns `true` if no condition has been added.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl From<QueryBuilder> for Matcher {
    fn from(builder: QueryBuilder) -> Self {
        builder.build()
    }
}
