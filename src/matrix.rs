/*!
# Adjacency Matrices

The one graph representation of this crate: an `n x n` 0/1 adjacency matrix
stored as one bitset row per node. This favors the dense graphs produced by
`G(n,p)` generation and gives O(1) edge tests, which is all the downstream
algorithms need.

Orientation is a type-level marker: [`AdjMatrix<Directed>`] stores one bit per
arc, [`AdjMatrix<Undirected>`] keeps both triangles in sync so that
`m[u][v] == m[v][u]` holds by construction. The diagonal is always zero; the
matrix rejects self-loops.
*/

use std::marker::PhantomData;

use crate::{edge::*, node::*};

/// Type-level orientation marker of a matrix
pub trait Direction: Copy + Default + 'static {
    /// Returns *true* if edges are oriented
    fn is_directed() -> bool;

    /// Returns *true* if edges are unoriented
    fn is_undirected() -> bool {
        !Self::is_directed()
    }
}

/// Marker for graphs whose edges are oriented
#[derive(Debug, Copy, Clone, Default)]
pub struct Directed;

/// Marker for graphs whose edges are unoriented
#[derive(Debug, Copy, Clone, Default)]
pub struct Undirected;

impl Direction for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl Direction for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// An adjacency matrix with one bitset row per node
#[derive(Clone)]
pub struct AdjMatrix<D: Direction> {
    rows: Vec<NodeBitSet>,
    num_edges: NumEdges,
    _dir: PhantomData<D>,
}

/// An adjacency matrix over oriented edges
pub type AdjMatrixDir = AdjMatrix<Directed>;

/// An adjacency matrix over unoriented edges
pub type AdjMatrixUndir = AdjMatrix<Undirected>;

impl<D: Direction> AdjMatrix<D> {
    /// Creates an empty matrix with `n` singleton nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            rows: vec![NodeBitSet::new(n); n as usize],
            num_edges: 0,
            _dir: PhantomData,
        }
    }

    /// Creates a matrix from a number of nodes and an iterator over edges
    pub fn from_edges(n: NumNodes, edges: impl Iterator<Item = impl Into<Edge>>) -> Self {
        let mut matrix = Self::new(n);
        for Edge(u, v) in edges.map(|e| e.into()) {
            matrix.add_edge(u, v);
        }
        matrix
    }

    /// Returns the number of nodes of the matrix
    pub fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }

    /// Returns the number of nodes as usize
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns *true* if the matrix has no nodes (and thus no edges)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of edges; for undirected matrices every edge
    /// `{u,v}` is counted once
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Returns an iterator over V
    pub fn vertices(&self) -> impl Iterator<Item = Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the edge (u,v) exists.
    /// ** Panics if `u >= n || v >= n` **
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.rows[u as usize].get_bit(v)
    }

    /// Returns an iterator over the (open, out-) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.rows[u as usize].iter_set_bits()
    }

    /// Returns the number of (outgoing) neighbors of `u`.
    /// ** Panics if `u >= n` **
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.rows[u as usize].cardinality()
    }

    /// Adds the edge (u,v) to the matrix.
    /// Returns *true* if the edge was already present.
    /// ** Panics if `u >= n || v >= n` or the edge is a self-loop **
    pub fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert!(!Edge(u, v).is_loop(), "Self-loops are not supported!");

        if self.rows[u as usize].set_bit(v) {
            return true;
        }

        if D::is_undirected() {
            self.rows[v as usize].set_bit(u);
        }

        self.num_edges += 1;
        false
    }

    /// Adds the edge (u,v) to the matrix.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    pub fn add_edge(&mut self, u: Node, v: Node) {
        assert!(!self.try_add_edge(u, v));
    }

    /// Returns an iterator over all edges in the matrix.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered;
    /// this yields every edge of an undirected matrix exactly once.
    pub fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .map(move |v| Edge(u, v))
                .filter(move |e| !only_normalized || e.is_normalized())
        })
    }
}
