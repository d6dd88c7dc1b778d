use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

#[test]
fn range_validation() {
    assert!(PaddingRange::new(10, 5).is_err());
    let r = PaddingRange::new(5, 5).unwrap();
    assert_eq!((r.min(), r.max()), (5, 5));
    assert_eq!(PaddingRange::default(), PaddingRange::new(30, 85).unwrap());
}

#[test]
fn range_deserialize_validates() {
    let ok: PaddingRange = serde_json::from_str(r#"{"min": 1, "max": 2}"#).unwrap();
    assert_eq!(ok.max(), 2);
    assert!(serde_json::from_str::<PaddingRange>(r#"{"min": 3, "max": 2}"#).is_err());
}

#[test]
fn sums_hold_for_many_rolls() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xfeed);
    let range = PaddingRange::default();
    for _ in 0..5_000 {
        let p = PaddingSpec::random(range, &mut rng);
        assert!((30..=85).contains(&p.total), "{p:?}");
        assert_eq!(p.top + p.bottom, p.total, "{p:?}");
        assert_eq!(p.left + p.right, p.total, "{p:?}");
        assert!(p.left >= p.right, "{p:?}");
    }
}

#[test]
fn sums_hold_for_small_totals() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for total in 0..12 {
        let range = PaddingRange::new(total, total).unwrap();
        for _ in 0..200 {
            let p = PaddingSpec::random(range, &mut rng);
            assert_eq!(p.total, total);
            assert_eq!(p.top + p.bottom, total);
            assert_eq!(p.left + p.right, total);
        }
    }
}

#[test]
fn fixed_minimum_total_bounds_each_side() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let range = PaddingRange::new(30, 30).unwrap();
    for _ in 0..500 {
        let p = PaddingSpec::random(range, &mut rng);
        assert_eq!(p.total, 30);
        // round(30 * 0.1) = 3, round(30 * 0.3) = 9
        assert!((12..=18).contains(&p.top), "{p:?}");
        assert!((15..=24).contains(&p.left), "{p:?}");
        assert!(p.right >= 6, "{p:?}");
    }
}

#[test]
fn both_vertical_preferences_occur() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let range = PaddingRange::new(60, 60).unwrap();
    let mut top_heavy = 0;
    let mut bottom_heavy = 0;
    for _ in 0..400 {
        let p = PaddingSpec::random(range, &mut rng);
        if p.top > p.bottom {
            top_heavy += 1;
        } else if p.bottom > p.top {
            bottom_heavy += 1;
        }
    }
    assert!(top_heavy > 50, "{top_heavy}");
    assert!(bottom_heavy > 50, "{bottom_heavy}");
}

#[test]
fn same_seed_same_rolls() {
    let range = PaddingRange::default();
    let mut a = ChaCha8Rng::seed_from_u64(9);
    let mut b = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..32 {
        assert_eq!(
            PaddingSpec::random(range, &mut a),
            PaddingSpec::random(range, &mut b)
        );
    }
}
