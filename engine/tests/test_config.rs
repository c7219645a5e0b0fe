//! Tests for factory configuration

use nlstream_core_rs::backbone::R;
use nlstream_core_rs::{
    ComponentSource, RandomStream, RngError, StreamFactory, StreamFactoryConfig,
};

#[test]
fn test_default_config_matches_default_factory() {
    let mut configured = StreamFactory::from_config(&StreamFactoryConfig::default()).unwrap();
    let mut plain = StreamFactory::new();

    assert_eq!(
        configured.nonlinear_data().fingerprint(),
        plain.nonlinear_data().fingerprint()
    );
    assert_eq!(
        configured.create_stream().next_double(),
        plain.create_stream().next_double()
    );
}

#[test]
fn test_config_from_json_applies_seeds() {
    let json = r#"{
        "linear_seed": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19],
        "nonlinear_seed": [3, 4],
        "components": { "kind": "scrambled", "lengths": [101, 103], "repetitions": 2, "seed": 42 }
    }"#;
    let config = StreamFactoryConfig::from_json(json).unwrap();
    let factory = StreamFactory::from_config(&config).unwrap();

    let expected: Vec<u32> = (1..=19).collect();
    assert_eq!(factory.package_linear_seed().to_vec(), expected);
    assert_eq!(factory.package_nonlinear_seed(), vec![3, 4]);
    assert_eq!(factory.nonlinear_data().lengths(), vec![101, 103]);
}

#[test]
fn test_config_with_explicit_tables() {
    let config = StreamFactoryConfig {
        components: ComponentSource::Tables {
            tables: vec![vec![10, 20, 30], vec![1, 2, 3, 4, 5]],
        },
        ..Default::default()
    };
    let factory = StreamFactory::from_config(&config).unwrap();
    assert_eq!(factory.nonlinear_tables()[0], vec![10, 20, 30]);
}

#[test]
fn test_config_rejects_short_linear_seed() {
    let config = StreamFactoryConfig {
        linear_seed: Some(vec![1, 2, 3]),
        ..Default::default()
    };
    assert_eq!(
        StreamFactory::from_config(&config).unwrap_err(),
        RngError::InvalidArgument(format!("Linear seed must contain {} values, got 3", R))
    );
}

#[test]
fn test_config_rejects_zero_linear_seed() {
    let config = StreamFactoryConfig {
        linear_seed: Some(vec![0; R]),
        ..Default::default()
    };
    assert!(matches!(
        StreamFactory::from_config(&config),
        Err(RngError::InvalidSeed { .. })
    ));
}

#[test]
fn test_config_validates_nonlinear_seed_against_components() {
    let config = StreamFactoryConfig {
        nonlinear_seed: Some(vec![0, 0, 0]),
        components: ComponentSource::Scrambled {
            lengths: vec![7, 11],
            repetitions: 1,
            seed: 1,
        },
        ..Default::default()
    };
    assert!(matches!(
        StreamFactory::from_config(&config),
        Err(RngError::InvalidArgument(_))
    ));
}

#[test]
fn test_unknown_component_kind() {
    let err = StreamFactoryConfig::from_json(r#"{"components": {"kind": "magic"}}"#).unwrap_err();
    assert!(matches!(err, RngError::Config(_)));
}
