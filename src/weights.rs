/*!
# Weighted Matrices

Turns adjacency matrices into the weighted inputs the path and tree algorithms
consume. Two assignment modes exist:

- [`WeightMatrix::unit_weights`] gives every edge the weight `1`; absent edges
  become [`Cost::Unreachable`](crate::cost::Cost). This is the input shape for
  Dijkstra and Floyd–Warshall.
- [`AdjMatrix::random_edge_weights`](crate::matrix::AdjMatrix::random_edge_weights)
  draws an independent uniform weight from the open interval `(0,1)` per edge
  of an undirected matrix, yielding the edge list Kruskal works on.

A [`WeightMatrix`] always has a zero diagonal and is immutable once built.
*/

use num::{One, Zero};
use rand::Rng;
use rand_distr::Open01;

use crate::{cost::*, edge::*, matrix::*, node::*};

/// An `n x n` matrix of path costs with a zero diagonal
#[derive(Clone)]
pub struct WeightMatrix<W> {
    n: NumNodes,
    data: Vec<Cost<W>>,
}

impl<W: Copy + Zero> WeightMatrix<W> {
    /// Creates a matrix with `n` nodes, a zero diagonal and all other entries unreachable
    pub fn new(n: NumNodes) -> Self {
        let mut matrix = Self {
            n,
            data: vec![Cost::Unreachable; (n as usize) * (n as usize)],
        };
        for u in 0..n {
            matrix.set(u, u, Cost::zero());
        }
        matrix
    }

    /// Creates a matrix from an iterator over oriented weighted arcs.
    /// ** Panics if any endpoint is `>= n` **
    pub fn from_arcs(n: NumNodes, arcs: impl Iterator<Item = WeightedEdge<W>>) -> Self {
        let mut matrix = Self::new(n);
        for arc in arcs {
            matrix.set(arc.source(), arc.target(), Cost::Finite(arc.weight));
        }
        matrix
    }

    /// Creates a matrix from an iterator over unoriented weighted edges,
    /// assigning the weight in both directions.
    /// ** Panics if any endpoint is `>= n` **
    pub fn from_edges(n: NumNodes, edges: impl Iterator<Item = WeightedEdge<W>>) -> Self {
        let mut matrix = Self::new(n);
        for edge in edges {
            matrix.set(edge.source(), edge.target(), Cost::Finite(edge.weight));
            matrix.set(edge.target(), edge.source(), Cost::Finite(edge.weight));
        }
        matrix
    }

    pub(crate) fn set(&mut self, u: Node, v: Node, cost: Cost<W>) {
        let idx = self.index_of(u, v);
        self.data[idx] = cost;
    }
}

impl<W: Copy + Zero + One> WeightMatrix<W> {
    /// Derives the unit-weight matrix of an adjacency matrix: weight `1`
    /// wherever an edge exists, unreachable wherever none does, `0` on the
    /// diagonal.
    pub fn unit_weights<D: Direction>(adj: &AdjMatrix<D>) -> Self {
        let mut matrix = Self::new(adj.number_of_nodes());
        for Edge(u, v) in adj.edges(false) {
            matrix.set(u, v, Cost::Finite(W::one()));
        }
        matrix
    }
}

impl<W: Copy> WeightMatrix<W> {
    /// Returns the number of nodes of the matrix
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the number of nodes as usize
    pub fn len(&self) -> usize {
        self.n as usize
    }

    /// Returns *true* if the matrix has no nodes
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Returns an iterator over V
    pub fn vertices(&self) -> impl Iterator<Item = Node> {
        0..self.n
    }

    /// Returns the cost of the direct edge (u,v).
    /// ** Panics if `u >= n || v >= n` **
    pub fn weight(&self, u: Node, v: Node) -> Cost<W> {
        self.data[self.index_of(u, v)]
    }

    fn index_of(&self, u: Node, v: Node) -> usize {
        assert!(u < self.n && v < self.n);
        (u as usize) * (self.n as usize) + (v as usize)
    }
}

impl AdjMatrixUndir {
    /// Assigns every edge `{u,v}` with `u < v` an independent uniform-random
    /// weight from the open interval `(0,1)`, in row-major edge order.
    pub fn random_edge_weights<R: Rng>(&self, rng: &mut R) -> Vec<WeightedEdge<f64>> {
        self.edges(true)
            .map(|Edge(u, v)| WeightedEdge::new(u, v, rng.sample(Open01)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::RandomGraph;

    #[test]
    fn unit_weights_round_trip() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [1 as NumNodes, 2, 10, 30] {
            for p in [0.0, 0.2, 0.7, 1.0] {
                let adj = AdjMatrixUndir::gnp(rng, n, p);
                let weighted: WeightMatrix<u32> = WeightMatrix::unit_weights(&adj);

                for u in 0..n {
                    for v in 0..n {
                        if u == v {
                            assert_eq!(weighted.weight(u, v), Cost::Finite(0));
                        } else if adj.has_edge(u, v) {
                            assert_eq!(weighted.weight(u, v), Cost::Finite(1));
                        } else {
                            assert!(weighted.weight(u, v).is_unreachable());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn unit_weights_directed() {
        let adj = AdjMatrixDir::from_edges(3, [(0, 1)].into_iter());
        let weighted: WeightMatrix<u32> = WeightMatrix::unit_weights(&adj);

        assert_eq!(weighted.weight(0, 1), Cost::Finite(1));
        assert!(weighted.weight(1, 0).is_unreachable());
    }

    #[test]
    fn random_edge_weights_are_open_unit() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);

        for n in [2 as NumNodes, 10, 40] {
            let adj = AdjMatrixUndir::gnp(rng, n, 0.5);
            let edges = adj.random_edge_weights(rng);

            assert_eq!(edges.len(), adj.number_of_edges() as usize);
            for e in &edges {
                assert!(e.edge.is_normalized() && !e.edge.is_loop());
                assert!(adj.has_edge(e.source(), e.target()));
                assert!(e.weight > 0.0 && e.weight < 1.0);
            }
        }
    }

    #[test]
    fn from_edges_is_symmetric() {
        let weighted = WeightMatrix::from_edges(3, [WeightedEdge::new(0, 2, 5u32)].into_iter());

        assert_eq!(weighted.weight(0, 2), Cost::Finite(5));
        assert_eq!(weighted.weight(2, 0), Cost::Finite(5));
        assert!(weighted.weight(0, 1).is_unreachable());
    }
}
