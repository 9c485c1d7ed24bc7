//! Ordering types for ranking players.
//!
//! Provides [`Dir`] for sort direction and [`OrderBy`] for field-based ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::player::PlayerRecord;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    Asc,
    /// Descending order (largest first).
    #[default]
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stat column and the direction to rank it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderBy {
    /// The field to sort by.
    pub field: Field,
    /// The sort direction.
    pub dir: Dir,
}

impl OrderBy {
    /// Ascending ordering on `field`.
    pub fn asc(field: Field) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    /// Descending ordering on `field`.
    pub fn desc(field: Field) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    /// Creates a new ordering with the given direction.
    pub fn new(field: Field, dir: Dir) -> Self {
        OrderBy { field, dir }
    }

    /// Compares two players on this ordering's field and direction.
    pub fn compare(&self, a: &PlayerRecord, b: &PlayerRecord) -> Ordering {
        let base = self.field.value_of(a).cmp(&self.field.value_of(b));
        self.dir.apply(base)
    }
}

impl Default for OrderBy {
    /// Most points first.
    fn default() -> Self {
        OrderBy::desc(Field::Points)
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Greater), Ordering::Greater);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);

        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Greater), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn order_by_constructors() {
        let asc = OrderBy::asc(Field::Goals);
        assert_eq!(asc.field, Field::Goals);
        assert_eq!(asc.dir, Dir::Asc);

        let desc = OrderBy::desc(Field::Assists);
        assert_eq!(desc.field, Field::Assists);
        assert_eq!(desc.dir, Dir::Desc);

        assert_eq!(OrderBy::default(), OrderBy::desc(Field::Points));
    }

    #[test]
    fn order_by_compare() {
        let lemieux = PlayerRecord::new("Lemieux", "PIT", "CAN", 45, 54);
        let yzerman = PlayerRecord::new("Yzerman", "DET", "CAN", 42, 56);

        // Goals: 45 vs 42
        assert_eq!(
            OrderBy::asc(Field::Goals).compare(&lemieux, &yzerman),
            Ordering::Greater
        );
        assert_eq!(
            OrderBy::desc(Field::Goals).compare(&lemieux, &yzerman),
            Ordering::Less
        );

        // Points: 99 vs 98
        assert_eq!(
            OrderBy::desc(Field::Points).compare(&yzerman, &lemieux),
            Ordering::Greater
        );
    }

    #[test]
    fn display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(OrderBy::desc(Field::Goals).to_string(), "goals desc");
    }
}
