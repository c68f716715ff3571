/*!
`wgraphs` is a small toolkit for **w**eighted random graphs. It covers three things:

- generating random graphs under the Erdős–Rényi `G(n,p)` model (directed or
  undirected, never with self-loops),
- deriving weighted matrices or weighted edge lists from an adjacency matrix,
- running the classic algorithms on the result: single-source shortest paths
  (Dijkstra), all-pairs shortest paths (Floyd–Warshall) and minimum spanning
  forests (Kruskal over a disjoint-set forest).

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of
nodes in the graph. Adjacency matrices store one bitset row per node, which
suits the dense instances `G(n,p)` tends to produce. **Weighted** matrices
store [`Cost`](cost::Cost) entries: either a finite weight or an explicit
`Unreachable` marker. There is deliberately no finite "infinity" constant;
sums through unreachable entries saturate instead of overflowing.

### Directed vs Undirected

Orientation is part of the matrix type: [`AdjMatrix<Directed>`](matrix::AdjMatrix)
treats `(u, v)` and `(v, u)` as distinct arcs, while `AdjMatrix<Undirected>`
keeps both triangles of the matrix in sync so symmetry holds by construction.

# Design

Generators are configurable builder structs (`Gnp::new().nodes(n).prob(p)`),
with convenience constructors on the matrix types themselves via
[`RandomGraph`](gens::RandomGraph). Algorithms are exposed as traits on the
data they consume: distance queries live on
[`WeightMatrix`](weights::WeightMatrix), spanning forests on slices of
weighted edges. Everything that draws randomness takes a caller-supplied
`&mut impl Rng`, so deterministic seeds are a test concern, not a library one.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, costs and both matrix types,
- [`gens`] includes the random matrix generators,
- [`weights`] includes the weight-assignment helpers,
- [`algo`] includes the path and spanning-forest algorithms.

In most use-cases, `use wgraphs::{prelude::*, algo::*, gens::*};` suffices:

```
use wgraphs::{algo::*, gens::*, prelude::*};

let mut rng = rand::rng();

let adj = AdjMatrixUndir::gnp(&mut rng, 8, 0.4);
let unit: WeightMatrix<u32> = WeightMatrix::unit_weights(&adj);

let from_zero = unit.distances_from(0);
let between_all = unit.all_pairs_distances();

let edges = adj.random_edge_weights(&mut rng);
let forest = edges.minimum_spanning_forest(adj.number_of_nodes());

assert!(from_zero[0].is_finite());
assert!(forest.edges.len() < adj.len());
assert_eq!(between_all.weight(0, 0), Cost::Finite(0));
```

# When to use

You should only use this library if your graphs fit in an `n x n` matrix and
you need only the algorithms above. In all other cases, it might make sense to
check out [petgraph](https://crates.io/crates/petgraph) who provide a more
extensive library for general graphs in *Rust*.
*/

pub mod algo;
pub mod cost;
pub mod edge;
pub mod gens;
pub mod matrix;
pub mod node;
pub mod utils;
pub mod weights;

/// `wgraphs::prelude` includes definitions for nodes, edges, path costs and
/// both the adjacency and weight matrix types.
pub mod prelude {
    pub use super::{cost::*, edge::*, matrix::*, node::*, weights::*};
}
