use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::{Error, Result},
    point::{validate_points, Point},
    tree::BallTree,
};

/// Construction parameters for a [`BallTree`].
///
/// ```
/// use balltree::{BallTree, Point};
///
/// let points = vec![Point::new(vec![0.0, 0.0], "a"), Point::new(vec![1.0, 1.0], "b")];
/// let tree = BallTree::builder(2).sample_size(3).seed(42).build(points).unwrap();
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    dimensions: usize,
    sample_size: usize,
    seed: Option<u64>,
}

impl Builder {
    /// Number of points sampled when choosing each pivot.
    pub const DEFAULT_SAMPLE_SIZE: usize = 5;

    #[must_use]
    pub fn new(dimensions: usize) -> Self {
        Builder {
            dimensions,
            sample_size: Self::DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }

    /// Sets how many points are sampled for each pivot; the pivot is their
    /// median along the dimension of greatest spread.
    #[must_use]
    pub fn sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Seeds pivot selection so the same input always yields the same tree.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Fails if the configuration is invalid or any point does not have
    /// `dimensions` finite coordinates.
    pub fn build<T>(&self, points: Vec<Point<T>>) -> Result<BallTree<T>> {
        match self.seed {
            Some(seed) => self.build_with_rng(points, &mut StdRng::seed_from_u64(seed)),
            None => self.build_with_rng(points, &mut rand::thread_rng()),
        }
    }

    /// Builds with a caller-supplied random source, ignoring any seed.
    ///
    /// # Errors
    ///
    /// Same as [`Builder::build`].
    pub fn build_with_rng<T, R: Rng>(
        &self,
        points: Vec<Point<T>>,
        rng: &mut R,
    ) -> Result<BallTree<T>> {
        if self.sample_size == 0 {
            return Err(Error::ZeroSampleSize);
        }
        validate_points(&points, self.dimensions)?;
        Ok(BallTree::build(points, self.dimensions, self.sample_size, rng))
    }
}
