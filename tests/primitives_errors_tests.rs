use rfa_rs::prelude::*;

#[test]
fn test_rfa_error_display() {
    // InvalidTarget
    let err = RfaError::InvalidTarget("triangle".to_string());
    assert_eq!(format!("{}", err), "Invalid target: 'triangle'");

    // InvalidActivation
    let err = RfaError::InvalidActivation("gelu".to_string());
    assert_eq!(format!("{}", err), "Invalid activation: 'gelu'");

    // EmptyLayerSpec
    let err = RfaError::EmptyLayerSpec;
    assert_eq!(
        format!("{}", err),
        "Invalid layer spec: no layer widths given"
    );

    // InvalidLayerToken
    let err = RfaError::InvalidLayerToken("x".to_string());
    assert_eq!(
        format!("{}", err),
        "Invalid layer spec: 'x' is not an integer"
    );

    // TooManyLayers
    let err = RfaError::TooManyLayers { got: 11, max: 10 };
    assert_eq!(
        format!("{}", err),
        "Invalid layer spec: 11 layers (at most 10)"
    );

    // InvalidLambda
    let err = RfaError::InvalidLambda(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid lambda: -1 (must be >= 0 and finite)"
    );

    // InvalidNoise
    let err = RfaError::InvalidNoise(-0.5);
    assert_eq!(
        format!("{}", err),
        "Invalid noise: -0.5 (must be >= 0 and finite)"
    );

    // MismatchedInputs
    let err = RfaError::MismatchedInputs {
        rows: 10,
        targets: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: feature matrix has 10 rows, targets have 5"
    );

    // DimensionMismatch
    let err = RfaError::DimensionMismatch {
        expected: 51,
        got: 50,
    };
    assert_eq!(
        format!("{}", err),
        "Dimension mismatch: expected 51 weights, got 50"
    );

    // SingularSystem
    let err = RfaError::SingularSystem { dim: 4 };
    let msg = format!("{}", err);
    assert!(msg.starts_with("Singular system: 4x4"), "Message was: {}", msg);
    assert!(msg.contains("lambda > 0"), "Message was: {}", msg);

    // DuplicateParameter
    let err = RfaError::DuplicateParameter { parameter: "seed" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'seed' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_rfa_error_properties() {
    let err1 = RfaError::EmptyLayerSpec;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, RfaError::InvalidTarget("foo".to_string()));
}

#[test]
fn test_rfa_error_kind() {
    assert!(RfaError::InvalidTarget("foo".to_string()).is_validation());
    assert!(RfaError::TooManyLayers { got: 12, max: 10 }.is_validation());
    assert!(!RfaError::SingularSystem { dim: 3 }.is_validation());
}

#[test]
fn test_rfa_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<RfaError>();
}
