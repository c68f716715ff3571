/*!
# Graph Generators

Builder-style generators for random adjacency matrices.

The typical usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate a matrix via `generate()`.

In addition, the [`RandomGraph`] trait abstracts generation into reusable
constructors on the matrix types themselves, e.g.
`AdjMatrixUndir::gnp(rng, n, p)`.

Supported models:
- G(n,p): Erdős–Rényi model with independent edge probability
*/

use rand::Rng;

use crate::{matrix::*, node::*};

mod gnp;

pub use gnp::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random matrix generator.
pub trait MatrixGenerator {
    /// Generates a random adjacency matrix.
    ///
    /// The orientation of the result is chosen by the caller through the
    /// direction marker `D`.
    fn generate<D, R>(&self, rng: &mut R) -> AdjMatrix<D>
    where
        D: Direction,
        R: Rng;
}

/// Trait for building full matrix instances from common random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` matrix using edge probability `p`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;
}

impl<D: Direction> RandomGraph for AdjMatrix<D> {
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Gnp::new().nodes(n).prob(p).generate(rng)
    }
}
