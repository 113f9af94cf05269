use crate::{distance::euclidean, point::Point};

/// A ball: every point in this node's subtree lies within `radius` of `pivot`.
///
/// Children are handles into the owning tree's node arena.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) pivot: Point<T>,
    pub(crate) radius: f64,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl<T> Node<T> {
    pub(crate) fn new(pivot: Point<T>, radius: f64) -> Node<T> {
        Node {
            pivot,
            radius,
            left: None,
            right: None,
        }
    }

    #[must_use]
    pub fn pivot(&self) -> &Point<T> {
        &self.pivot
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn left(&self) -> Option<usize> {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> Option<usize> {
        self.right
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    #[must_use]
    pub fn distance_to_pivot(&self, query: &[f64]) -> f64 {
        euclidean(query, &self.pivot.coords)
    }
}
