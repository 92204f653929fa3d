use std::fs;

use anu_placement::config::ConfigError;
use anu_placement::{SwarmConfig, UpdateRule};

#[test]
fn test_default_matches_reference_run() {
    let config = SwarmConfig::default();

    assert_eq!(config.num_particles, 50);
    assert_eq!(config.num_dimensions, 2);
    assert_eq!(config.max_iterations, 100);
    assert_eq!(config.inertia_weight, 0.8);
    assert_eq!(config.cognitive_weight, 2.0);
    assert_eq!(config.social_weight, 2.0);
    assert_eq!(config.coverage_radius, 10.0);
    assert_eq!(config.update_rule, UpdateRule::Faithful);
    assert_eq!(config.fixed_nodes.len(), 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_particles_and_iterations_are_valid() {
    let config = SwarmConfig::default().with_particles(0).with_iterations(0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_weights_are_not_range_checked() {
    let config = SwarmConfig::default().with_weights(-3.0, 12.0, 100.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_fixed_nodes_are_accepted() {
    let config = SwarmConfig::default().with_fixed_nodes(Vec::new());
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_zero_dimensions() {
    let config = SwarmConfig::default().with_dimensions(0).with_fixed_nodes(Vec::new());
    assert!(matches!(config.validate(), Err(ConfigError::ZeroDimensions)));
}

#[test]
fn test_rejects_node_dimension_mismatch() {
    let config = SwarmConfig::default().with_dimensions(3);
    match config.validate() {
        Err(ConfigError::NodeDimension {
            index,
            found,
            expected,
        }) => {
            assert_eq!(index, 0);
            assert_eq!(found, 2);
            assert_eq!(expected, 3);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_rejects_non_finite_values() {
    let config = SwarmConfig::default().with_weights(f64::NAN, 2.0, 2.0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonFinite {
            name: "inertia_weight",
            ..
        })
    ));

    let config = SwarmConfig::default().with_radius(f64::INFINITY);
    assert!(matches!(config.validate(), Err(ConfigError::NonFinite { .. })));

    let config = SwarmConfig::default().with_fixed_nodes(vec![vec![1.0, 1.0], vec![f64::NAN, 0.0]]);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonFiniteNode { index: 1 })
    ));
}

#[test]
fn test_partial_json_uses_defaults() {
    let config: SwarmConfig =
        serde_json::from_str(r#"{ "num_particles": 7, "update_rule": "canonical" }"#).unwrap();

    assert_eq!(config.num_particles, 7);
    assert_eq!(config.update_rule, UpdateRule::Canonical);
    assert_eq!(config.max_iterations, 100);
    assert_eq!(config.fixed_nodes, SwarmConfig::default().fixed_nodes);
}

#[test]
fn test_from_json_file() {
    let path = std::env::temp_dir().join(format!("anu_placement_config_{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{ "max_iterations": 3, "fixed_nodes": [[1.0, 1.0], [2.0, 0.5]] }"#,
    )
    .unwrap();

    let config = SwarmConfig::from_json_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.max_iterations, 3);
    assert_eq!(config.fixed_nodes, vec![vec![1.0, 1.0], vec![2.0, 0.5]]);
}

#[test]
fn test_from_json_file_errors() {
    let missing = std::env::temp_dir().join("anu_placement_does_not_exist.json");
    assert!(matches!(
        SwarmConfig::from_json_file(&missing),
        Err(ConfigError::Io { .. })
    ));

    let path = std::env::temp_dir().join(format!("anu_placement_bad_{}.json", std::process::id()));
    fs::write(&path, "{ not json").unwrap();
    let result = SwarmConfig::from_json_file(&path);
    fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}
