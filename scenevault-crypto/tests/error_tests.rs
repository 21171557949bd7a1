use scenevault_crypto::CryptoError;
use scenevault_types::Scene;

#[test]
fn error_display_key_derivation() {
    let err = CryptoError::KeyDerivation("bad params".into());
    assert!(format!("{err}").contains("key derivation failed"));
    assert!(format!("{err}").contains("bad params"));
}

#[test]
fn error_display_decryption() {
    let err = CryptoError::Decryption("tampered".into());
    assert!(format!("{err}").contains("decryption failed"));
}

#[test]
fn error_display_invalid_nonce_length() {
    let err = CryptoError::InvalidNonceLength {
        expected: 12,
        actual: 8,
    };
    let msg = format!("{err}");
    assert!(msg.contains("12"));
    assert!(msg.contains("8"));
}

#[test]
fn error_from_scene_serialization() {
    let scene_err = Scene::from_json_bytes(b"not json").unwrap_err();
    let crypto_err: CryptoError = scene_err.into();
    assert!(format!("{crypto_err}").contains("serialization"));
    assert!(!crypto_err.is_decryption_failure());
}

#[test]
fn decryption_failure_classification() {
    assert!(CryptoError::Decryption("x".into()).is_decryption_failure());
    assert!(!CryptoError::Encryption("x".into()).is_decryption_failure());
    assert!(!CryptoError::KeyDerivation("x".into()).is_decryption_failure());
}
