//! Tests for deterministic streams
//!
//! CRITICAL: Determinism is sacred. Same package seeds MUST produce the same
//! streams, substreams and values.

use nlstream_core_rs::{RandomStream, StreamFactory};

#[test]
fn test_two_factories_produce_same_sequence() {
    let mut s1 = StreamFactory::new().create_stream();
    let mut s2 = StreamFactory::new().create_stream();

    for i in 0..1000 {
        let val1 = s1.next_double();
        let val2 = s2.next_double();
        assert_eq!(
            val1, val2,
            "Determinism broken at iteration {}: {} != {}",
            i, val1, val2
        );
    }
}

#[test]
fn test_successive_streams_differ() {
    let mut factory = StreamFactory::new();
    let mut s1 = factory.create_stream();
    let mut s2 = factory.create_stream();

    let val1 = s1.next_double();
    let val2 = s2.next_double();

    assert!(val1 > 0.0 && val1 < 1.0);
    assert!(val2 > 0.0 && val2 < 1.0);
    assert_ne!(val1, val2, "Different streams should produce different values");
}

#[test]
fn test_reset_start_substream_replays() {
    let mut s = StreamFactory::new().create_stream();

    let first: Vec<f64> = (0..100).map(|_| s.next_double()).collect();
    for _ in 0..537 {
        s.next_double();
    }
    s.reset_start_substream();
    let replay: Vec<f64> = (0..100).map(|_| s.next_double()).collect();

    assert_eq!(first, replay);
}

#[test]
fn test_reset_start_substream_after_next_substream() {
    let mut s = StreamFactory::new().create_stream();
    s.reset_next_substream();
    s.reset_next_substream();

    let first: Vec<u32> = (0..64).map(|_| s.next_bits()).collect();
    for _ in 0..10 {
        s.next_bits();
    }
    s.reset_start_substream();
    let replay: Vec<u32> = (0..64).map(|_| s.next_bits()).collect();

    assert_eq!(first, replay);
}

#[test]
fn test_reset_start_stream_returns_to_first_substream() {
    let mut s = StreamFactory::new().create_stream();
    let first = s.next_double();

    s.reset_next_substream();
    s.reset_next_substream();
    s.next_double();
    s.reset_start_stream();

    assert_eq!(s.next_double(), first);
}

#[test]
fn test_next_substream_does_not_repeat_previous_start() {
    let mut s = StreamFactory::new().create_stream();
    let start = s.next_double();

    s.reset_next_substream();
    for i in 0..10_000 {
        assert_ne!(
            s.next_double(),
            start,
            "previous substream start reappeared after {} calls",
            i
        );
    }
}

#[test]
fn test_substreams_of_clones_stay_in_step() {
    let mut factory = StreamFactory::new();
    let mut original = factory.create_stream();
    original.next_double();
    let mut copy = original.clone();

    for _ in 0..3 {
        original.reset_next_substream();
        copy.reset_next_substream();
        assert_eq!(original.next_double(), copy.next_double());
    }
}

#[test]
fn test_clone_is_independent() {
    let mut original = StreamFactory::new().create_stream();
    let mut copy = original.clone();

    for _ in 0..50 {
        original.next_double();
    }
    original.reset_next_substream();

    let mut reference = StreamFactory::new().create_stream();
    assert_eq!(copy.next_double(), reference.next_double());
}

#[test]
fn test_stream_produces_diverse_values() {
    let mut s = StreamFactory::new().create_stream();
    let values: std::collections::HashSet<u32> = (0..100).map(|_| s.next_bits()).collect();
    assert!(
        values.len() > 90,
        "Stream not diverse enough: only {} unique values out of 100",
        values.len()
    );
}

#[test]
fn test_next_int_range_deterministic() {
    let mut s1 = StreamFactory::new().create_stream();
    let mut s2 = StreamFactory::new().create_stream();

    for _ in 0..50 {
        let val1 = s1.next_int(10, 1000);
        let val2 = s2.next_int(10, 1000);
        assert_eq!(val1, val2, "next_int() not deterministic!");
        assert!((10..=1000).contains(&val1));
    }
}

#[test]
fn test_next_int_single_value() {
    let mut s = StreamFactory::new().create_stream();
    assert_eq!(s.next_int(5, 5), 5);
}

#[test]
#[should_panic(expected = "lower bound must not exceed upper bound")]
fn test_next_int_invalid_bounds() {
    let mut s = StreamFactory::new().create_stream();
    s.next_int(100, 50);
}

#[test]
fn test_array_fills_match_single_calls() {
    let mut s1 = StreamFactory::new().create_stream();
    let mut s2 = StreamFactory::new().create_stream();

    let mut doubles = [0.0; 20];
    s1.next_array_of_double(&mut doubles);
    for d in doubles {
        assert_eq!(d, s2.next_double());
    }

    let mut ints = [0; 20];
    s1.next_array_of_int(-3, 3, &mut ints);
    for i in ints {
        assert_eq!(i, s2.next_int(-3, 3));
    }
}
