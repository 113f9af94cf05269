use crate::{error::Result, point::Point};

/// Queries shared by the ball tree and the brute-force reference index.
pub trait Index<T> {
    fn dimensions(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Payload of the point whose coordinates equal `query`, if any.
    ///
    /// # Errors
    ///
    /// Fails if `query` does not match the index's dimensionality.
    fn find(&self, query: &[f64]) -> Result<Option<&T>>;

    /// Up to `k` closest points as `(distance, point)`, ascending by distance.
    ///
    /// # Errors
    ///
    /// Fails if `query` does not match the index's dimensionality.
    fn k_nearest(&self, query: &[f64], k: usize) -> Result<Vec<(f64, &Point<T>)>>;

    /// All points within `radius` of `query`, ascending by distance.
    ///
    /// # Errors
    ///
    /// Fails if `query` does not match the index's dimensionality.
    fn within_radius(&self, query: &[f64], radius: f64) -> Result<Vec<(f64, &Point<T>)>>;
}
