//! Static ball tree for exact lookup and k nearest neighbor search in
//! multi-dimensional Euclidean space.
//!
//! ```
//! use balltree::{BallTree, Point};
//!
//! let tree = BallTree::new(vec![Point::new(vec![3.0, 4.0], 'a')], 2).unwrap();
//!
//! assert_eq!(tree.find(&[3.0, 4.0]).unwrap(), Some(&'a'));
//! assert_eq!(tree.find(&[0.0, 0.0]).unwrap(), None);
//!
//! let neighbors = tree.k_nearest(&[3.0, 4.0], 5).unwrap();
//! assert_eq!(neighbors.len(), 1);
//! assert_eq!(neighbors[0].0, 0.0);
//! ```
mod builder;
mod distance;
mod error;
mod index;
#[allow(clippy::module_name_repetitions)]
mod linear;
mod neighbors;
mod node;
mod point;
mod tree;

pub use builder::Builder;
pub use distance::euclidean;
pub use error::{Error, Result};
pub use index::Index;
pub use linear::LinearIndex;
pub use node::Node;
pub use point::Point;
pub use tree::BallTree;
