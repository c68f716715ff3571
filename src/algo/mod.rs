/*!
# Graph Algorithms

This module provides the classic algorithms over weighted matrices and edge
lists. All algorithms are re-exported at the top level of this module, so you
can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to single-source shortest paths (Dijkstra), all-pairs shortest
paths (Floyd–Warshall) and minimum spanning forests (Kruskal).

Algorithm frontends are traits on the data they consume: distances are methods
on [`WeightMatrix`](crate::weights::WeightMatrix), spanning forests are methods
on slices of weighted edges.
*/

mod dijkstra;
mod floyd_warshall;
mod kruskal;

use crate::{cost::*, edge::*, node::*, utils::*, weights::*};

pub use dijkstra::*;
pub use floyd_warshall::*;
pub use kruskal::*;
