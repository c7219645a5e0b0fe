//! Tests for seed validation
//!
//! Every rejected seed must leave the factory and the stream untouched.

use nlstream_core_rs::backbone::{verify_seed, R};
use nlstream_core_rs::{RandomStream, RngError, StreamFactory};

#[test]
fn test_zero_linear_seed_rejected() {
    assert!(matches!(
        verify_seed(&[0; R]),
        Err(RngError::InvalidSeed { .. })
    ));

    let mut factory = StreamFactory::new();
    let before = factory.package_linear_seed();
    assert!(matches!(
        factory.set_package_linear_seed(&[0; R]),
        Err(RngError::InvalidSeed { .. })
    ));
    assert_eq!(factory.package_linear_seed(), before);
}

#[test]
fn test_reserved_linear_seed_rejected() {
    let mut seed = [0; R];
    seed[R - 1] = 1;
    let mut factory = StreamFactory::new();
    assert!(matches!(
        factory.set_package_linear_seed(&seed),
        Err(RngError::InvalidSeed { .. })
    ));
}

#[test]
fn test_single_nonzero_word_accepted() {
    for i in 0..R {
        let mut seed = [0; R];
        seed[i] = 0x8000_0000;
        assert!(verify_seed(&seed).is_ok(), "word {} rejected", i);
    }
}

#[test]
fn test_nonlinear_seed_wrong_length() {
    let mut factory = StreamFactory::new();
    assert!(matches!(
        factory.set_package_nonlinear_seed(&[1, 2]),
        Err(RngError::InvalidArgument(_))
    ));
    assert_eq!(factory.package_nonlinear_seed(), vec![0, 0, 0]);
}

#[test]
fn test_nonlinear_seed_out_of_range() {
    let mut factory = StreamFactory::new();
    let err = factory.set_package_nonlinear_seed(&[0, 1021, 0]).unwrap_err();
    assert_eq!(
        err,
        RngError::InvalidArgument("Seed number 1 must be between 0 and 1020".to_string())
    );
}

#[test]
fn test_failed_instance_seed_keeps_stream_position() {
    let mut factory = StreamFactory::new();
    let mut s = factory.create_stream();
    let mut reference = s.clone();

    for _ in 0..5 {
        s.next_double();
        reference.next_double();
    }
    assert!(s.set_linear_seed(&[0; R]).is_err());
    assert!(s.set_nonlinear_seed(&[9999, 0, 0]).is_err());

    for _ in 0..20 {
        assert_eq!(s.next_double(), reference.next_double());
    }
}

#[test]
fn test_instance_linear_seed_override() {
    let mut factory = StreamFactory::new();
    let mut s = factory.create_stream();
    let mut seed = [0; R];
    seed[3] = 42;

    s.set_linear_seed(&seed).unwrap();
    assert_eq!(s.linear_state(), seed);
    let first = s.next_double();

    s.reset_next_substream();
    s.reset_start_stream();
    assert_eq!(s.next_double(), first);
}

#[test]
fn test_error_messages() {
    let err = verify_seed(&[0; R]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid linear seed: at least one word must be non-zero"
    );
}
