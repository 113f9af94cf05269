use log::{debug, trace};
use ordered_float::OrderedFloat;
use rand::Rng;

use crate::{
    builder::Builder,
    distance::euclidean,
    error::Result,
    index::Index,
    neighbors::Neighbors,
    node::Node,
    point::{validate_query, Point},
};

/// A static ball tree over points of a fixed dimensionality.
///
/// Nodes are stored in an arena; the root, when present, is node 0.
#[derive(Debug, Clone)]
pub struct BallTree<T> {
    dimensions: usize,
    nodes: Vec<Node<T>>,
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

// `builder` does not depend on `T`, so it lives in a concrete impl to keep
// `BallTree::builder(d)` inferable; `Builder::build` picks the payload type.
impl BallTree<()> {
    #[must_use]
    pub fn builder(dimensions: usize) -> Builder {
        Builder::new(dimensions)
    }
}

impl<T> BallTree<T> {
    /// Builds a tree, choosing pivots with the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Fails if `dimensions` is zero or any point does not have
    /// `dimensions` finite coordinates.
    pub fn new(points: Vec<Point<T>>, dimensions: usize) -> Result<Self> {
        Builder::new(dimensions).build(points)
    }

    /// Builds a tree, choosing pivots with `rng`.
    ///
    /// # Errors
    ///
    /// Same as [`BallTree::new`].
    pub fn with_rng<R: Rng>(points: Vec<Point<T>>, dimensions: usize, rng: &mut R) -> Result<Self> {
        Builder::new(dimensions).build_with_rng(points, rng)
    }

    // Points are expected to be validated by the caller.
    pub(crate) fn build<R: Rng>(
        points: Vec<Point<T>>,
        dimensions: usize,
        sample_size: usize,
        rng: &mut R,
    ) -> Self {
        let num_points = points.len();
        let mut tree = BallTree {
            dimensions,
            nodes: Vec::with_capacity(num_points),
        };

        let mut pending: Vec<(Vec<Point<T>>, Option<(usize, Side)>)> = vec![(points, None)];
        while let Some((points, link)) = pending.pop() {
            let (node, left, right) = match split(points, dimensions, sample_size, rng) {
                Some(split) => split,
                None => continue,
            };
            let node_id = tree.nodes.len();
            tree.nodes.push(node);
            match link {
                Some((parent, Side::Left)) => tree.nodes[parent].left = Some(node_id),
                Some((parent, Side::Right)) => tree.nodes[parent].right = Some(node_id),
                None => {}
            }
            // Right is pushed first so the left subtree is built first
            pending.push((right, Some((node_id, Side::Right))));
            pending.push((left, Some((node_id, Side::Left))));
        }

        debug!(
            "built ball tree: {} points, {} dimensions, height {}",
            num_points,
            dimensions,
            tree.height()
        );
        tree
    }

    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn root(&self) -> Option<&Node<T>> {
        self.nodes.first()
    }

    #[must_use]
    pub fn node(&self, node_id: usize) -> Option<&Node<T>> {
        self.nodes.get(node_id)
    }

    /// Every stored point, each exactly once.
    pub fn iter(&self) -> impl Iterator<Item = &Point<T>> + '_ {
        self.nodes.iter().map(Node::pivot)
    }

    /// Number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = self.root_id().map(|id| (id, 1)).into_iter().collect::<Vec<_>>();
        while let Some((node_id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[node_id];
            for child in node.left.into_iter().chain(node.right) {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Payload of the point whose coordinates equal `query`, if any.
    ///
    /// # Errors
    ///
    /// Fails if `query` does not have the tree's dimensionality.
    pub fn find(&self, query: &[f64]) -> Result<Option<&T>> {
        validate_query(query, self.dimensions)?;
        let mut visited = 0;
        let mut found = None;
        let mut stack = self.root_id().into_iter().collect::<Vec<_>>();
        while let Some(node_id) = stack.pop() {
            let node = &self.nodes[node_id];
            visited += 1;
            if node.pivot.coords == query {
                found = Some(&node.pivot.payload);
                break;
            }
            // The query lies outside this ball, so it cannot be in the subtree
            if node.distance_to_pivot(query) > node.radius {
                continue;
            }
            stack.extend(node.right);
            stack.extend(node.left);
        }
        trace!(
            "find: found={}, visited {} of {} nodes",
            found.is_some(),
            visited,
            self.len()
        );
        Ok(found)
    }

    /// The `k` closest points as `(distance, point)`, ascending by distance.
    ///
    /// Returns fewer than `k` entries when the tree holds fewer points.
    ///
    /// # Errors
    ///
    /// Fails if `query` does not have the tree's dimensionality.
    pub fn k_nearest(&self, query: &[f64], k: usize) -> Result<Vec<(f64, &Point<T>)>> {
        validate_query(query, self.dimensions)?;
        if k == 0 || self.is_empty() {
            return Ok(Vec::new());
        }

        let mut neighbors = Neighbors::new(k);
        let mut visited = 0;
        let mut stack = self.root_id().into_iter().collect::<Vec<_>>();
        while let Some(node_id) = stack.pop() {
            let node = &self.nodes[node_id];
            let distance = node.distance_to_pivot(query);
            // No point in this ball can beat the current worst candidate
            if let Some(worst) = neighbors.worst() {
                if distance - node.radius > worst {
                    continue;
                }
            }
            visited += 1;
            neighbors.offer(distance, node_id);
            stack.extend(node.right);
            stack.extend(node.left);
        }
        trace!(
            "k_nearest: k={}, kept {}, visited {} of {} nodes",
            k,
            neighbors.len(),
            visited,
            self.len()
        );

        Ok(neighbors
            .into_sorted_vec()
            .into_iter()
            .map(|(distance, node_id)| (distance, &self.nodes[node_id].pivot))
            .collect())
    }

    /// All points within `radius` of `query`, ascending by distance.
    ///
    /// # Errors
    ///
    /// Fails if `query` does not have the tree's dimensionality.
    pub fn within_radius(&self, query: &[f64], radius: f64) -> Result<Vec<(f64, &Point<T>)>> {
        validate_query(query, self.dimensions)?;
        let mut result = Vec::new();
        if radius.is_nan() || radius < 0.0 {
            return Ok(result);
        }

        let mut visited = 0;
        let mut queue = self.root_id().into_iter().collect::<Vec<_>>();
        while let Some(node_id) = queue.pop() {
            let node = &self.nodes[node_id];
            let distance = node.distance_to_pivot(query);
            if distance - node.radius > radius {
                continue;
            }
            visited += 1;
            if distance <= radius {
                result.push((distance, &node.pivot));
            }
            queue.extend(node.right);
            queue.extend(node.left);
        }
        trace!(
            "within_radius: radius={}, found {}, visited {} of {} nodes",
            radius,
            result.len(),
            visited,
            self.len()
        );

        result.sort_by_key(|&(distance, _)| OrderedFloat(distance));
        Ok(result)
    }

    fn root_id(&self) -> Option<usize> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}

impl<T> Index<T> for BallTree<T> {
    fn dimensions(&self) -> usize {
        BallTree::dimensions(self)
    }

    fn len(&self) -> usize {
        BallTree::len(self)
    }

    fn find(&self, query: &[f64]) -> Result<Option<&T>> {
        BallTree::find(self, query)
    }

    fn k_nearest(&self, query: &[f64], k: usize) -> Result<Vec<(f64, &Point<T>)>> {
        BallTree::k_nearest(self, query, k)
    }

    fn within_radius(&self, query: &[f64], radius: f64) -> Result<Vec<(f64, &Point<T>)>> {
        BallTree::within_radius(self, query, radius)
    }
}

type Split<T> = (Node<T>, Vec<Point<T>>, Vec<Point<T>>);

// Turns a point set into a node plus the point sets of its two children.
fn split<T, R: Rng>(
    mut points: Vec<Point<T>>,
    dimensions: usize,
    sample_size: usize,
    rng: &mut R,
) -> Option<Split<T>> {
    if points.len() <= 1 {
        return points
            .pop()
            .map(|point| (Node::new(point, 0.0), Vec::new(), Vec::new()));
    }

    let dimension = spread_dimension(&points, dimensions);
    let pivot_index = choose_pivot(&points, dimension, sample_size, rng);

    let pivot_coords = &points[pivot_index].coords;
    let radius = points
        .iter()
        .map(|point| euclidean(pivot_coords, &point.coords))
        .fold(0.0, f64::max);

    // Only the pivot entry itself is excluded; equal points go left
    let pivot = points.remove(pivot_index);
    let split_value = pivot.coords[dimension];
    let (left, right): (Vec<_>, Vec<_>) = points
        .into_iter()
        .partition(|point| point.coords[dimension] <= split_value);

    Some((Node::new(pivot, radius), left, right))
}

// First dimension with the strictly largest (max - min) range.
fn spread_dimension<T>(points: &[Point<T>], dimensions: usize) -> usize {
    let mut lows = vec![f64::INFINITY; dimensions];
    let mut highs = vec![f64::NEG_INFINITY; dimensions];
    for point in points {
        for (i, &x) in point.coords.iter().enumerate() {
            lows[i] = lows[i].min(x);
            highs[i] = highs[i].max(x);
        }
    }

    let mut greatest_spread = f64::NEG_INFINITY;
    let mut dimension = 0;
    for (i, (low, high)) in lows.iter().zip(highs.iter()).enumerate() {
        let spread = high - low;
        if spread > greatest_spread {
            greatest_spread = spread;
            dimension = i;
        }
    }
    dimension
}

// Median of `sample_size` points drawn with replacement, ranked on `dimension`.
fn choose_pivot<T, R: Rng>(
    points: &[Point<T>],
    dimension: usize,
    sample_size: usize,
    rng: &mut R,
) -> usize {
    let mut sample = (0..sample_size)
        .map(|_| rng.gen_range(0..points.len()))
        .collect::<Vec<_>>();
    sample.sort_by_key(|&i| OrderedFloat(points[i].coords[dimension]));
    sample[sample_size / 2]
}
