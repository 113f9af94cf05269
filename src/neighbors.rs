use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

/// The `capacity` closest items seen so far, farthest on top.
///
/// Unfilled capacity is simply "fewer than `capacity` entries held";
/// the heap never contains placeholder entries, so any distance,
/// infinite included, is accepted while a slot is free.
pub(crate) struct Neighbors {
    capacity: usize,
    heap: BinaryHeap<(OrderedFloat<f64>, usize)>,
}

impl Neighbors {
    pub fn new(capacity: usize) -> Self {
        Neighbors {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Distance of the worst kept candidate once every slot is taken.
    pub fn worst(&self) -> Option<f64> {
        if !self.is_full() {
            return None;
        }
        self.heap.peek().map(|(distance, _)| distance.0)
    }

    /// Keeps `item` while a slot is free, or if it beats the worst candidate.
    pub fn offer(&mut self, distance: f64, item: usize) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if let Some(worst) = self.worst() {
            if distance >= worst {
                return false;
            }
            self.heap.pop();
        }
        self.heap.push((OrderedFloat(distance), item));
        true
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drains the candidates in ascending order of distance.
    pub fn into_sorted_vec(self) -> Vec<(f64, usize)> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|(distance, item)| (distance.into_inner(), item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Neighbors;

    #[test]
    fn fills_then_evicts_worst() {
        let mut neighbors = Neighbors::new(2);
        assert_eq!(neighbors.worst(), None);

        assert!(neighbors.offer(5.0, 0));
        assert_eq!(neighbors.worst(), None);
        assert!(neighbors.offer(3.0, 1));
        assert_eq!(neighbors.worst(), Some(5.0));

        // Equal to the worst is not an improvement
        assert!(!neighbors.offer(5.0, 2));
        assert!(neighbors.offer(1.0, 3));
        assert_eq!(neighbors.worst(), Some(3.0));
        assert_eq!(neighbors.len(), 2);

        assert_eq!(neighbors.into_sorted_vec(), vec![(1.0, 3), (3.0, 1)]);
    }

    #[test]
    fn infinite_distances_fill_free_slots() {
        let mut neighbors = Neighbors::new(3);
        assert!(neighbors.offer(f64::INFINITY, 0));
        assert!(neighbors.offer(f64::INFINITY, 1));
        assert!(neighbors.offer(2.0, 2));
        assert_eq!(neighbors.worst(), Some(f64::INFINITY));

        assert!(!neighbors.offer(f64::INFINITY, 3));
        assert!(neighbors.offer(1.0, 4));
        let kept = neighbors.into_sorted_vec();
        assert_eq!(kept.len(), 3);
        assert_eq!(&kept[..2], &[(1.0, 4), (2.0, 2)]);
        assert_eq!(kept[2].0, f64::INFINITY);
    }

    #[test]
    fn zero_capacity() {
        let mut neighbors = Neighbors::new(0);
        assert!(!neighbors.offer(0.0, 0));
        assert!(neighbors.into_sorted_vec().is_empty());
    }

    #[test]
    fn partially_filled() {
        let mut neighbors = Neighbors::new(5);
        neighbors.offer(2.0, 7);
        neighbors.offer(0.5, 8);
        assert!(!neighbors.is_full());
        assert_eq!(neighbors.into_sorted_vec(), vec![(0.5, 8), (2.0, 7)]);
    }
}
