use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn unit_samples_stay_in_range() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_f64_01();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn entropy_generators_differ() {
    let mut a = Rng64::from_entropy();
    let mut b = Rng64::from_entropy();
    assert_ne!(a.next_u64(), b.next_u64());
}

#[test]
fn nonzero_span_substitutes_one() {
    assert_eq!(nonzero_span(0.0), 1.0);
    assert_eq!(nonzero_span(f64::NAN), 1.0);
    assert_eq!(nonzero_span(f64::INFINITY), 1.0);
    assert_eq!(nonzero_span(2.5), 2.5);
    assert_eq!(nonzero_span(-3.0), -3.0);
}
