use vdiff_core::errors::{ExError, ExErrorKind, VdiffError};

#[test]
fn test_unknown_traversal_verifiable_by_kind() {
    let err = VdiffError::UnknownTraversal {
        value: "sideways".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex_err.code(), "ERR_INVALID_INPUT");
    assert_eq!(ex_err.field(), Some("traversal"));
    assert!(ex_err.message().contains("sideways"));
}

#[test]
fn test_unknown_profile_names_its_field() {
    let err = VdiffError::UnknownProfile {
        value: "loud".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex_err.field(), Some("log_profile"));
}

#[test]
fn test_invalid_config_distinct_from_invalid_input() {
    let err = VdiffError::InvalidConfig {
        message: "expected a string".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidConfig);
    assert_eq!(ex_err.code(), "ERR_INVALID_CONFIG");
    assert_ne!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex_err.field(), None);
    assert!(ex_err.message().contains("Invalid configuration"));
}

#[test]
fn test_error_kind_code_mapping() {
    // Test that each kind has a stable, unique code
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_ex_error_builder_and_display() {
    let err = ExError::new(ExErrorKind::InvalidConfig)
        .with_op("load_config")
        .with_field("traversal")
        .with_message("unsupported value");

    assert_eq!(err.op(), Some("load_config"));
    assert_eq!(
        err.to_string(),
        "[ERR_INVALID_CONFIG] in operation 'load_config': unsupported value (field: traversal)"
    );
}

#[test]
fn test_toml_error_converts_to_invalid_config() {
    let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
    let err = VdiffError::from(toml_err);

    assert!(matches!(err, VdiffError::InvalidConfig { .. }));
}
