use balltree::{BallTree, Index, LinearIndex, Point};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(rng: &mut StdRng, n: usize, dimensions: usize) -> Vec<Point<f64>> {
    (0..n)
        .map(|_| {
            let coords = (0..dimensions)
                .map(|_| rng.gen_range(-1000.0..1000.0))
                .collect();
            Point::new(coords, rng.gen())
        })
        .collect()
}

fn assert_all_found(rng: &mut StdRng, n: usize, dimensions: usize) {
    let points = random_points(rng, n, dimensions);
    let tree = BallTree::with_rng(points.clone(), dimensions, rng).unwrap();
    let linear = LinearIndex::new(points.clone(), dimensions).unwrap();

    for point in &points {
        let found = tree.find(&point.coords).unwrap();
        assert!(found.is_some());
        assert_eq!(found, linear.find(&point.coords).unwrap());
    }
}

#[test]
fn few_dimensions() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_all_found(&mut rng, 100, 3);
    assert_all_found(&mut rng, 80, 5);
}

#[test]
fn higher_dimensions() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_all_found(&mut rng, 70, 7);
    assert_all_found(&mut rng, 60, 9);
    assert_all_found(&mut rng, 40, 10);
}

#[test]
fn highly_populated() {
    let mut rng = StdRng::seed_from_u64(2);
    assert_all_found(&mut rng, 10000, 3);
    assert_all_found(&mut rng, 1000, 5);
}

#[test]
fn not_there() {
    let mut rng = StdRng::seed_from_u64(3);

    // Queries lie outside the [-1000, 1000] cube every point was drawn from
    let points = random_points(&mut rng, 100, 2);
    let tree = BallTree::with_rng(points, 2, &mut rng).unwrap();
    for _ in 0..40 {
        let query = [
            f64::from(rng.gen_range(2000_i32..3000)),
            f64::from(rng.gen_range(-3000_i32..-2000)),
        ];
        assert_eq!(tree.find(&query).unwrap(), None);
    }

    let points = random_points(&mut rng, 50, 6);
    let tree = BallTree::with_rng(points, 6, &mut rng).unwrap();
    for _ in 0..40 {
        let query = [
            f64::from(rng.gen_range(2000_i32..3000)),
            f64::from(rng.gen_range(-3000_i32..-2000)),
            f64::from(rng.gen_range(4000_i32..5000)),
            f64::from(rng.gen_range(2000_i32..3000)),
            f64::from(rng.gen_range(-3000_i32..-2000)),
            f64::from(rng.gen_range(4000_i32..5000)),
        ];
        assert_eq!(tree.find(&query).unwrap(), None);
    }
}

#[test]
fn inside_the_ball_but_absent() {
    // A grid with its center removed: the center lies inside the root ball
    let mut points = Vec::new();
    for x in -3_i32..=3 {
        for y in -3_i32..=3 {
            if x != 0 || y != 0 {
                points.push(Point::new(vec![f64::from(x), f64::from(y)], (x, y)));
            }
        }
    }
    let tree = BallTree::builder(2).seed(9).build(points).unwrap();
    assert_eq!(tree.find(&[0.0, 0.0]).unwrap(), None);
    assert_eq!(tree.find(&[0.5, -0.5]).unwrap(), None);
    assert_eq!(tree.find(&[3.0, -3.0]).unwrap(), Some(&(3, -3)));
}

#[test]
fn empty_tree() {
    let mut rng = StdRng::seed_from_u64(4);
    for dimensions in [3, 6] {
        let tree: BallTree<f64> = BallTree::new(Vec::new(), dimensions).unwrap();
        let linear: LinearIndex<f64> = LinearIndex::new(Vec::new(), dimensions).unwrap();
        for _ in 0..30 {
            let query = (0..dimensions)
                .map(|_| f64::from(rng.gen_range(-1000_i32..1000)))
                .collect::<Vec<_>>();
            assert_eq!(tree.find(&query).unwrap(), None);
            assert_eq!(linear.find(&query).unwrap(), None);
        }
    }
}
