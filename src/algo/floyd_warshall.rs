use std::ops::Add;

use super::*;

/// All-pairs shortest paths.
pub trait AllPairsPaths {
    /// Returns the matrix of shortest distances between every pair of nodes,
    /// following the Floyd–Warshall algorithm. Pairs without a connecting
    /// path keep the [`Cost::Unreachable`] marker.
    ///
    /// Precondition: all finite weights are non-negative.
    fn all_pairs_distances(&self) -> Self;
}

impl<W> AllPairsPaths for WeightMatrix<W>
where
    W: Copy + PartialOrd + Add<Output = W>,
{
    fn all_pairs_distances(&self) -> Self {
        let mut distances = self.clone();

        // `k` must be the outermost loop: pass `k` only admits paths whose
        // intermediate nodes are `0..=k`.
        for k in self.vertices() {
            for i in self.vertices() {
                let head = distances.weight(i, k);
                if head.is_unreachable() {
                    continue;
                }

                for j in self.vertices() {
                    let via_k = head + distances.weight(k, j);
                    if via_k < distances.weight(i, j) {
                        distances.set(i, j, via_k);
                    }
                }
            }
        }

        distances
    }
}
