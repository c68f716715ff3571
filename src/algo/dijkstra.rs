use std::ops::Add;

use num::Zero;

use super::*;

/// Single-source shortest paths over non-negative edge weights.
pub trait SingleSourcePaths<W> {
    /// Returns the shortest distance from `source` to every node, following
    /// Dijkstra's algorithm. Nodes without a path from `source` keep the
    /// [`Cost::Unreachable`] marker; this is designed behavior, not a fault.
    ///
    /// Precondition: all finite weights are non-negative.
    /// ** Panics if `source >= n` **
    fn distances_from(&self, source: Node) -> DistanceArray<W>;
}

impl<W> SingleSourcePaths<W> for WeightMatrix<W>
where
    W: Copy + PartialOrd + Add<Output = W> + Zero,
{
    fn distances_from(&self, source: Node) -> DistanceArray<W> {
        let n = self.number_of_nodes();
        assert!(source < n);

        let mut distances: DistanceArray<W> = vec![Cost::Unreachable; n as usize];
        distances[source as usize] = Cost::zero();

        let mut visited = NodeBitSet::new(n);

        for _ in 1..n {
            // The unvisited node closest to the source is settled next. Once
            // only unreachable nodes remain, no relaxation can improve
            // anything and we are done.
            let Some(u) = closest_unvisited(&distances, &visited) else {
                break;
            };
            visited.set_bit(u);

            let through_u = distances[u as usize];
            for v in self.vertices() {
                if visited.get_bit(v) {
                    continue;
                }

                let relaxed = through_u + self.weight(u, v);
                if relaxed < distances[v as usize] {
                    distances[v as usize] = relaxed;
                }
            }
        }

        distances
    }
}

/// Scans for the unvisited node with minimal finite distance.
/// Ties are broken towards the lowest index as the scan keeps the first
/// minimum it encounters.
fn closest_unvisited<W>(distances: &DistanceArray<W>, visited: &NodeBitSet) -> Option<Node>
where
    W: Copy + PartialOrd,
{
    let mut best: Option<Node> = None;

    for (v, &dist) in distances.iter().enumerate() {
        let v = v as Node;
        if visited.get_bit(v) || dist.is_unreachable() {
            continue;
        }

        if best.is_none_or(|b| dist < distances[b as usize]) {
            best = Some(v);
        }
    }

    best
}
