/*!
# Path Costs

Distances and edge weights are represented as [`Cost`] values: either a finite
weight or the distinguished [`Cost::Unreachable`] marker. Using a tagged value
instead of a finite "large enough" sentinel means sums involving unreachable
entries saturate instead of silently overflowing, which Floyd–Warshall relies
on when adding two path lengths.

`Unreachable` compares strictly greater than every finite cost, so relaxation
steps can use plain `<` comparisons.
*/

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::Add,
};

use num::Zero;

/// A path cost: a finite weight or "no path exists".
#[derive(Copy, Clone, PartialEq)]
pub enum Cost<W> {
    /// A finite, attained cost
    Finite(W),
    /// No path with finite cost exists
    Unreachable,
}

/// Shortest distances from a fixed source, indexed by node
pub type DistanceArray<W> = Vec<Cost<W>>;

impl<W> Cost<W> {
    /// Returns *true* if the cost is the unreachable marker
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Cost::Unreachable)
    }

    /// Returns *true* if the cost is finite
    pub fn is_finite(&self) -> bool {
        !self.is_unreachable()
    }

    /// Returns the finite cost value, or `None` for unreachable entries
    pub fn finite(self) -> Option<W> {
        match self {
            Cost::Finite(w) => Some(w),
            Cost::Unreachable => None,
        }
    }
}

impl<W: PartialOrd> PartialOrd for Cost<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => a.partial_cmp(b),
            (Cost::Finite(_), Cost::Unreachable) => Some(Ordering::Less),
            (Cost::Unreachable, Cost::Finite(_)) => Some(Ordering::Greater),
            (Cost::Unreachable, Cost::Unreachable) => Some(Ordering::Equal),
        }
    }
}

impl<W: Add<Output = W>> Add for Cost<W> {
    type Output = Self;

    /// Adds two costs, saturating at `Unreachable`
    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Cost::Finite(a), Cost::Finite(b)) => Cost::Finite(a + b),
            _ => Cost::Unreachable,
        }
    }
}

impl<W: Zero> Zero for Cost<W> {
    fn zero() -> Self {
        Cost::Finite(W::zero())
    }

    fn is_zero(&self) -> bool {
        match self {
            Cost::Finite(w) => w.is_zero(),
            Cost::Unreachable => false,
        }
    }
}

impl<W: Display> Display for Cost<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Finite(w) => write!(f, "{w}"),
            Cost::Unreachable => write!(f, "x"),
        }
    }
}

impl<W: Display> Debug for Cost<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Cost::Finite(1) < Cost::Finite(2));
        assert!(Cost::Finite(u32::MAX) < Cost::Unreachable);
        assert!(Cost::<u32>::Unreachable <= Cost::Unreachable);
        assert!(!(Cost::<u32>::Unreachable < Cost::Unreachable));
    }

    #[test]
    fn saturating_add() {
        assert_eq!(Cost::Finite(2) + Cost::Finite(3), Cost::Finite(5));
        assert_eq!(Cost::Finite(2) + Cost::Unreachable, Cost::Unreachable);
        assert_eq!(Cost::Unreachable + Cost::Finite(3u32), Cost::Unreachable);
        assert_eq!(
            Cost::<u32>::Unreachable + Cost::Unreachable,
            Cost::Unreachable
        );
    }

    #[test]
    fn zero() {
        assert!(Cost::<u32>::zero().is_zero());
        assert!(!Cost::Finite(1u32).is_zero());
        assert!(!Cost::<u32>::Unreachable.is_zero());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Cost::Finite(3)), "3");
        assert_eq!(format!("{}", Cost::<u32>::Unreachable), "x");
    }
}
