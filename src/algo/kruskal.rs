use std::ops::Add;

use itertools::Itertools;
use num::Zero;

use super::*;

/// The edges accepted into a minimum spanning forest, in acceptance order,
/// together with their accumulated weight.
///
/// A connected input yields exactly `n - 1` edges (a spanning tree); a
/// disconnected input yields fewer. A forest is valid output, not an error.
pub struct SpanningForest<W> {
    /// Accepted edges in acceptance order
    pub edges: Vec<WeightedEdge<W>>,
    /// Sum of the accepted edges' weights
    pub total_weight: W,
}

/// Lazy Kruskal iterator: yields the edges of a minimum spanning forest in
/// acceptance order.
///
/// Edges are processed in ascending weight order; an edge whose endpoints
/// already share a component would close a cycle and is skipped. The full
/// input list is consumed; once `n - 1` merges have happened, the remaining
/// edges are all skipped as no-ops.
///
/// Implements [`Iterator`] with `Item = WeightedEdge<W>`.
pub struct Kruskal<W> {
    edges: std::vec::IntoIter<WeightedEdge<W>>,
    forest: DisjointSetForest,
}

impl<W> Kruskal<W>
where
    W: Copy + PartialOrd,
{
    /// Creates a Kruskal iterator over `n` nodes from a list of weighted edges.
    ///
    /// ** Panics if any endpoint is `>= n` or two weights do not compare
    /// (e.g. a NaN weight) **
    pub fn new(edges: &[WeightedEdge<W>], n: NumNodes) -> Self {
        let mut sorted = edges.to_vec();
        sorted.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap());

        Self {
            edges: sorted.into_iter(),
            forest: DisjointSetForest::new(n),
        }
    }

    /// Returns the number of disjoint components after the edges consumed so far
    pub fn number_of_components(&self) -> NumNodes {
        self.forest.number_of_sets()
    }
}

impl<W> Iterator for Kruskal<W>
where
    W: Copy + PartialOrd,
{
    type Item = WeightedEdge<W>;

    fn next(&mut self) -> Option<Self::Item> {
        self.edges
            .by_ref()
            .find(|e| self.forest.try_union(e.source(), e.target()))
    }
}

/// Minimum-spanning-forest construction over weighted edge lists.
pub trait MinimumSpanningForest<W> {
    /// Returns a lazy iterator over the accepted edges.
    fn kruskal(&self, n: NumNodes) -> Kruskal<W>;

    /// Runs Kruskal's algorithm to completion and collects the accepted
    /// edges and their total weight. An empty edge list yields an empty
    /// forest of weight zero.
    fn minimum_spanning_forest(&self, n: NumNodes) -> SpanningForest<W>;
}

impl<W> MinimumSpanningForest<W> for [WeightedEdge<W>]
where
    W: Copy + PartialOrd + Add<Output = W> + Zero,
{
    fn kruskal(&self, n: NumNodes) -> Kruskal<W> {
        Kruskal::new(self, n)
    }

    fn minimum_spanning_forest(&self, n: NumNodes) -> SpanningForest<W> {
        let edges = self.kruskal(n).collect_vec();
        let total_weight = edges
            .iter()
            .fold(W::zero(), |sum, e| sum + e.weight);

        SpanningForest {
            edges,
            total_weight,
        }
    }
}
