use rand_distr::{Bernoulli, Distribution};

use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree
/// which is more common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` matrices contain every possible edge on `n` nodes with probability
/// `p`, independent from each other.
///
/// Self-loops are never generated; the diagonal of the resulting matrix is
/// always zero. For undirected matrices, a single Bernoulli trial decides each
/// pair `{u,v}` and both triangles are written in the same pass, so the result
/// is symmetric by construction. For directed matrices, every ordered pair
/// gets its own independent trial.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = GnpType::Prob(prob);
        self
    }

    /// Resolves the configured edge probability.
    /// ** Panics if no probability was set or the average degree is invalid for `n` **
    fn resolved_prob(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = d / self.n as f64;
                assert!(
                    p.is_valid_probability(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/n`.
    /// Note that this conversion will only be done when calling `generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl MatrixGenerator for Gnp {
    /// Fills an adjacency matrix with random `G(n,p)` edges
    fn generate<D, R>(&self, rng: &mut R) -> AdjMatrix<D>
    where
        D: Direction,
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");

        let p = self.resolved_prob();
        // We verified that `p` is a valid probability at this point
        let coin = Bernoulli::new(p).unwrap();

        let mut matrix = AdjMatrix::new(self.n);

        if D::is_undirected() {
            for u in 0..self.n {
                for v in (u + 1)..self.n {
                    if coin.sample(rng) {
                        matrix.add_edge(u, v);
                    }
                }
            }
        } else {
            for u in 0..self.n {
                for v in 0..self.n {
                    if u != v && coin.sample(rng) {
                        matrix.add_edge(u, v);
                    }
                }
            }
        }

        matrix
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn wrong_prob() {
        for prob in [-10.0, -0.001, 1.0001, 3.4] {
            assert!(std::panic::catch_unwind(|| Gnp::new().prob(prob)).is_err());
        }
    }

    #[test]
    fn missing_prob() {
        assert!(
            std::panic::catch_unwind(|| {
                let rng = &mut Pcg64Mcg::seed_from_u64(1);
                let _: AdjMatrixUndir = Gnp::new().nodes(5).generate(rng);
            })
            .is_err()
        );
    }

    #[test]
    fn single_node() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        let matrix: AdjMatrixUndir = Gnp::new().nodes(1).prob(1.0).generate(rng);
        assert_eq!(matrix.number_of_nodes(), 1);
        assert_eq!(matrix.number_of_edges(), 0);
    }

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 2, 10, 25] {
            let empty: AdjMatrixUndir = Gnp::new().nodes(n).prob(0.0).generate(rng);
            assert_eq!(empty.number_of_edges(), 0);

            let complete: AdjMatrixUndir = Gnp::new().nodes(n).prob(1.0).generate(rng);
            assert_eq!(complete.number_of_edges(), n * (n - 1) / 2);

            let complete: AdjMatrixDir = Gnp::new().nodes(n).prob(1.0).generate(rng);
            assert_eq!(complete.number_of_edges(), n * (n - 1));
        }
    }

    #[test]
    fn undirected_matrices_are_symmetric() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for p in [0.1, 0.5, 0.9] {
            let n = 30;
            let matrix: AdjMatrixUndir = Gnp::new().nodes(n).prob(p).generate(rng);

            for u in 0..n {
                assert!(!matrix.has_edge(u, u));
                for v in 0..n {
                    assert_eq!(matrix.has_edge(u, v), matrix.has_edge(v, u));
                }
            }
        }
    }

    #[test]
    fn avg_deg_matches_prob() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        // p = d/n = 1.0: the complete graph
        let n = 10;
        let matrix: AdjMatrixDir = Gnp::new().nodes(n).avg_deg(n as f64).generate(rng);
        assert_eq!(matrix.number_of_edges(), n * (n - 1));
    }

    #[test]
    fn edge_count_is_plausible() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);

        let n: NumNodes = 100;
        let p = 0.25;
        let pairs = (n * (n - 1) / 2) as f64;

        let mut total = 0u64;
        for _ in 0..100 {
            let matrix = AdjMatrixUndir::gnp(rng, n, p);
            total += matrix.number_of_edges() as u64;
        }

        let mean = total as f64 / 100.0;
        assert!((mean - p * pairs).abs() < 0.05 * pairs);
    }
}
