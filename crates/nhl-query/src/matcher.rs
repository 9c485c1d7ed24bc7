//! Matcher trees for player predicates.
//!
//! A [`Matcher`] is either a leaf condition (team membership or a numeric
//! threshold) or a combinator over other matchers. Trees are immutable once
//! built and evaluation is total: [`Matcher::matches`] never fails.

use crate::error::Result;
use crate::field::Field;
use crate::player::PlayerRecord;

/// A predicate over a single [`PlayerRecord`].
///
/// | Variant | Matches when |
/// |---------|--------------|
/// | `All` | always |
/// | `Not(m)` | `m` does not match |
/// | `And(ms)` | every child matches (empty = always) |
/// | `Or(ms)` | at least one child matches (empty = never) |
/// | `PlaysIn(team)` | `record.team == team`, case-sensitive |
/// | `HasAtLeast { threshold, field }` | `record[field] >= threshold` |
/// | `HasFewerThan { threshold, field }` | `record[field] < threshold` |
///
/// Thresholds are signed. A negative threshold compares against the
/// non-negative counters normally, so `HasAtLeast` with a negative threshold
/// matches every record and `HasFewerThan` matches none.
///
/// # Example
///
/// ```
/// use nhl_query::{Field, Matcher, PlayerRecord};
///
/// let matcher = Matcher::and([
///     Matcher::plays_in("NYR"),
///     Matcher::not(Matcher::HasAtLeast { threshold: 2, field: Field::Goals }),
/// ]);
///
/// let player = PlayerRecord::new("Nobody", "NYR", "USA", 1, 7);
/// assert!(matcher.matches(&player));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Matcher {
    /// Matches every record.
    #[default]
    All,
    /// Negation of the inner matcher.
    Not(Box<Matcher>),
    /// Conjunction, evaluated left to right.
    And(Vec<Matcher>),
    /// Disjunction, evaluated left to right.
    Or(Vec<Matcher>),
    /// Team code equality.
    PlaysIn(String),
    /// `field >= threshold`.
    HasAtLeast { threshold: i64, field: Field },
    /// `field < threshold`.
    HasFewerThan { threshold: i64, field: Field },
}

impl Matcher {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Creates a matcher that accepts every record.
    pub fn all() -> Self {
        Matcher::All
    }

    /// Negates a matcher.
    pub fn not(inner: impl Into<Matcher>) -> Self {
        Matcher::Not(Box::new(inner.into()))
    }

    /// Conjunction of the given matchers, in order.
    ///
    /// Duplicates are kept and children are not reordered.
    pub fn and<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Matcher>,
    {
        Matcher::And(children.into_iter().map(Into::into).collect())
    }

    /// Disjunction of the given matchers, in order.
    pub fn or<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Matcher>,
    {
        Matcher::Or(children.into_iter().map(Into::into).collect())
    }

    /// Matches records whose team code equals `team`.
    pub fn plays_in(team: impl Into<String>) -> Self {
        Matcher::PlaysIn(team.into())
    }

    /// Matches records where `field >= threshold`.
    ///
    /// Returns [`QueryError::UnknownField`](crate::QueryError::UnknownField)
    /// if `field` is not `goals`, `assists` or `points`.
    pub fn has_at_least(threshold: i64, field: &str) -> Result<Self> {
        Ok(Matcher::HasAtLeast {
            threshold,
            field: field.parse()?,
        })
    }

    /// Matches records where `field < threshold`.
    ///
    /// Fails like [`Matcher::has_at_least`] on an unknown field.
    pub fn has_fewer_than(threshold: i64, field: &str) -> Result<Self> {
        Ok(Matcher::HasFewerThan {
            threshold,
            field: field.parse()?,
        })
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Tests whether a record satisfies this matcher.
    pub fn matches(&self, player: &PlayerRecord) -> bool {
        match self {
            Matcher::All => true,
            Matcher::Not(inner) => !inner.matches(player),
            Matcher::And(children) => children.iter().all(|child| child.matches(player)),
            Matcher::Or(children) => children.iter().any(|child| child.matches(player)),
            Matcher::PlaysIn(team) => player.team() == team.as_str(),
            Matcher::HasAtLeast { threshold, field } => {
                i128::from(field.value_of(player)) >= i128::from(*threshold)
            }
            Matcher::HasFewerThan { threshold, field } => {
                i128::from(field.value_of(player)) < i128::from(*threshold)
            }
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Number of nodes in the tree, including this one.
    pub fn size(&self) -> usize {
        match self {
            Matcher::Not(inner) => 1 + inner.size(),
            Matcher::And(children) | Matcher::Or(children) => {
                1 + children.iter().map(Matcher::size).sum::<usize>()
            }
            _ => 1,
        }
    }
}

impl std::fmt::Display for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_children(
            f: &mut std::fmt::Formatter<'_>,
            name: &str,
            children: &[Matcher],
        ) -> std::fmt::Result {
            write!(f, "{name}(")?;
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{child}")?;
            }
            write!(f, ")")
        }

        match self {
            Matcher::All => write!(f, "All"),
            Matcher::Not(inner) => write!(f, "Not({inner})"),
            Matcher::And(children) => write_children(f, "And", children),
            Matcher::Or(children) => write_children(f, "Or", children),
            Matcher::PlaysIn(team) => write!(f, "PlaysIn({team})"),
            Matcher::HasAtLeast { threshold, field } => {
                write!(f, "HasAtLeast({threshold}, {field})")
            }
            Matcher::HasFewerThan { threshold, field } => {
                write!(f, "HasFewerThan({threshold}, {field})")
            }
        }
    }
}
