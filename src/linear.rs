use ordered_float::OrderedFloat;

use crate::{
    distance::euclidean,
    error::Result,
    index::Index,
    point::{validate_points, validate_query, Point},
};

/// Brute-force index: every query scans all points.
///
/// Used as the reference the ball tree is tested and benchmarked against.
pub struct LinearIndex<T> {
    dimensions: usize,
    points: Vec<Point<T>>,
}

impl<T> LinearIndex<T> {
    /// # Errors
    ///
    /// Fails if `dimensions` is zero or any point does not have
    /// `dimensions` finite coordinates.
    pub fn new(points: Vec<Point<T>>, dimensions: usize) -> Result<Self> {
        validate_points(&points, dimensions)?;
        Ok(LinearIndex { dimensions, points })
    }

    #[must_use]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    fn sorted_by_distance<'a>(
        &'a self,
        query: &[f64],
        keep: impl Fn(f64) -> bool,
    ) -> Vec<(f64, &'a Point<T>)> {
        let mut result = self
            .points
            .iter()
            .map(|point| (euclidean(query, &point.coords), point))
            .filter(|(distance, _)| keep(*distance))
            .collect::<Vec<_>>();
        // Stable, so equidistant points keep their input order
        result.sort_by_key(|&(distance, _)| OrderedFloat(distance));
        result
    }
}

impl<T> Index<T> for LinearIndex<T> {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn find(&self, query: &[f64]) -> Result<Option<&T>> {
        validate_query(query, self.dimensions)?;
        Ok(self
            .points
            .iter()
            .find(|point| point.coords == query)
            .map(|point| &point.payload))
    }

    fn k_nearest(&self, query: &[f64], k: usize) -> Result<Vec<(f64, &Point<T>)>> {
        validate_query(query, self.dimensions)?;
        let mut result = self.sorted_by_distance(query, |_| true);
        result.truncate(k);
        Ok(result)
    }

    fn within_radius(&self, query: &[f64], radius: f64) -> Result<Vec<(f64, &Point<T>)>> {
        validate_query(query, self.dimensions)?;
        Ok(self.sorted_by_distance(query, |distance| distance <= radius))
    }
}
