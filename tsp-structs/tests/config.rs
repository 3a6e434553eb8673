use tsp_structs::config::{ComparatorConfig, RuntimeConfig};

#[test]
fn test_defaults() {
    let config = RuntimeConfig::default();
    assert_eq!(config.comparator.max_brute_force_n(), 10);
    assert_eq!(config.comparator.max_held_karp_n(), 20);
    assert_eq!(config.generator.min_cities(), 3);
    assert_eq!(config.generator.max_cities(), 15);
    assert_eq!(config.generator.min_dist(), 1);
    assert_eq!(config.generator.max_dist(), 100);
    assert_eq!(config.benchmark.max_end_n(), 12);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = RuntimeConfig::load(Some(r#"{"comparator": {"max_brute_force_n": 8}}"#)).unwrap();
    assert_eq!(config.comparator.max_brute_force_n(), 8);
    assert_eq!(config.comparator.max_held_karp_n(), 20);
    assert_eq!(config.benchmark.max_end_n(), 12);
}

#[test]
fn test_load_without_arg() {
    assert_eq!(RuntimeConfig::load(None).unwrap(), RuntimeConfig::default());
}

#[test]
fn test_load_rejects_bad_json() {
    assert!(RuntimeConfig::load(Some(r#"{"comparator": {"max_brute_force_n": "ten"}}"#)).is_err());
}

#[test]
fn test_unset_fields_are_not_serialized() {
    let json = serde_json::to_string(&ComparatorConfig::new(9, 18)).unwrap();
    assert_eq!(json, r#"{"max_brute_force_n":9,"max_held_karp_n":18}"#);
    assert_eq!(
        serde_json::to_string(&ComparatorConfig::default()).unwrap(),
        "{}"
    );
}

#[test]
fn test_overrides_take_precedence() {
    let config = RuntimeConfig::load(Some(
        r#"{"comparator": {"max_brute_force_n": 8, "max_held_karp_n": 16}}"#,
    ))
    .unwrap()
    .with_overrides(Some(4), None);
    assert_eq!(config.comparator.max_brute_force_n(), 4);
    assert_eq!(config.comparator.max_held_karp_n(), 16);

    let config = RuntimeConfig::default().with_overrides(None, Some(12));
    assert_eq!(config.comparator.max_brute_force_n(), 10);
    assert_eq!(config.comparator.max_held_karp_n(), 12);
}

#[test]
fn test_no_overrides_keeps_config() {
    let config = RuntimeConfig::load(Some(r#"{"benchmark": {"max_end_n": 9}}"#)).unwrap();
    assert_eq!(config.clone().with_overrides(None, None), config);
}
