use std::fmt;

use crate::error::{Error, Result};

/// A coordinate vector paired with an opaque payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<T> {
    pub coords: Vec<f64>,
    pub payload: T,
}

impl<T> Point<T> {
    #[must_use]
    pub fn new(coords: Vec<f64>, payload: T) -> Point<T> {
        Point { coords, payload }
    }

    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }
}

impl<T> From<(Vec<f64>, T)> for Point<T> {
    fn from((coords, payload): (Vec<f64>, T)) -> Self {
        Point::new(coords, payload)
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, '{}')", self.coords, self.payload)
    }
}

// Every point must have `dimensions` finite coordinates.
pub(crate) fn validate_points<T>(points: &[Point<T>], dimensions: usize) -> Result<()> {
    if dimensions == 0 {
        return Err(Error::ZeroDimensions);
    }
    for (index, point) in points.iter().enumerate() {
        if point.dimensions() != dimensions {
            return Err(Error::PointDimension {
                index,
                expected: dimensions,
                found: point.dimensions(),
            });
        }
        if point.coords.iter().any(|x| !x.is_finite()) {
            return Err(Error::NonFiniteCoordinate { index });
        }
    }
    Ok(())
}

pub(crate) fn validate_query(query: &[f64], dimensions: usize) -> Result<()> {
    if query.len() != dimensions {
        return Err(Error::QueryDimension {
            expected: dimensions,
            found: query.len(),
        });
    }
    if query.iter().any(|x| !x.is_finite()) {
        return Err(Error::NonFiniteQuery);
    }
    Ok(())
}
