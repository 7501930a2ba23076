use streamfilter::adapter::YieldMode;
use streamfilter::ConfigurationError;

#[test]
fn parses_char_mode() {
    assert_eq!("char".parse::<YieldMode>().unwrap(), YieldMode::Char);
}

#[test]
fn parses_token_mode() {
    assert_eq!("token".parse::<YieldMode>().unwrap(), YieldMode::Token);
}

#[test]
fn parses_chunk_mode() {
    let mode: YieldMode = "chunk:4".parse().unwrap();
    assert_eq!(mode, YieldMode::Chunk(std::num::NonZeroUsize::new(4).unwrap()));
}

#[test]
fn rejects_unknown_mode() {
    let err = "sentence".parse::<YieldMode>().unwrap_err();
    assert_eq!(err, ConfigurationError::InvalidYieldMode("sentence".to_string()));
}

#[test]
fn rejects_zero_chunk_size() {
    assert!("chunk:0".parse::<YieldMode>().is_err());
}

#[test]
fn rejects_non_numeric_chunk_size() {
    assert!("chunk:abc".parse::<YieldMode>().is_err());
}

#[test]
fn rejects_negative_chunk_size() {
    assert!("chunk:-1".parse::<YieldMode>().is_err());
}

#[test]
fn rejects_missing_chunk_size() {
    assert!("chunk:".parse::<YieldMode>().is_err());
}
