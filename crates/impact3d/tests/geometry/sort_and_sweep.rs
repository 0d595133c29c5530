use impact3d::bounding_volume::Aabb;
use impact3d::broad_phase::{brute_force_pairs, PairBuffer, SortAndSweep};
use impact3d::math::{Point, Real, Vector};
use oorandom::Rand32;

fn random_aabbs(rng: &mut Rand32, n: usize) -> (Vec<Aabb>, Vec<bool>) {
    let mut aabbs = Vec::with_capacity(n);
    let mut fixed = Vec::with_capacity(n);

    for _ in 0..n {
        let center = Point::new(
            rng.rand_float() * 10.0,
            rng.rand_float() * 10.0,
            rng.rand_float() * 10.0,
        );
        let half_extents = Vector::new(
            0.1 + rng.rand_float() * 1.5,
            0.1 + rng.rand_float() * 1.5,
            0.1 + rng.rand_float() * 1.5,
        );
        aabbs.push(Aabb::from_half_extents(center, half_extents));
        fixed.push(rng.rand_range(0..5) == 0);
    }

    (aabbs, fixed)
}

#[test]
fn sort_and_sweep_matches_brute_force() {
    let mut rng = Rand32::new(0x5eed);
    let mut sweep = SortAndSweep::new();
    let mut out = PairBuffer::with_capacity(64 * 63 / 2);

    for n in 0..=64 {
        for _ in 0..4 {
            let (aabbs, fixed) = random_aabbs(&mut rng, n);
            sweep.find_pairs(&aabbs, &fixed, &mut out).unwrap();
            assert_eq!(out.as_slice(), brute_force_pairs(&aabbs, &fixed).as_slice());
        }
    }
}

#[test]
fn identical_minimums_are_ordered_by_index() {
    // Every box starts at the same X: only the body index orders the sweep.
    let aabbs: Vec<_> = (0..16)
        .map(|i| {
            let y = i as Real * 0.6;
            Aabb::new(Point::new(0.0, y, 0.0), Point::new(1.0, y + 1.0, 1.0))
        })
        .collect();
    let fixed = vec![false; aabbs.len()];
    let mut out = PairBuffer::with_capacity(256);

    SortAndSweep::new().find_pairs(&aabbs, &fixed, &mut out).unwrap();
    assert_eq!(out.len(), 15);
    assert_eq!(out.as_slice(), brute_force_pairs(&aabbs, &fixed).as_slice());
}

#[test]
fn pair_pruned_by_the_z_sweep() {
    let aabbs = [
        Aabb::from_half_extents(Point::origin(), Vector::repeat(0.5)),
        Aabb::from_half_extents(Point::new(0.2, 0.3, 2.0), Vector::repeat(0.5)),
    ];
    let mut out = PairBuffer::with_capacity(1);

    SortAndSweep::new()
        .find_pairs(&aabbs, &[false; 2], &mut out)
        .unwrap();
    assert!(out.is_empty());
}
