//! Typed deserialization that reports where in the document it failed.
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("at JSON path {path} → {message}")]
pub struct PathError {
    pub path: String,
    pub message: String,
}

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, PathError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(into_path_error)
}

pub fn from_slice_with_path<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, PathError> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize::<_, T>(de).map_err(into_path_error)
}

fn into_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> PathError {
    PathError {
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{InadmissibleKeys, Options, UnknownFields};

    #[test]
    fn loads_options() {
        let opts: Options = from_str_with_path(r#"{"inadmissibleKeys": "deny"}"#).unwrap();
        assert_eq!(opts.inadmissible_keys, InadmissibleKeys::Deny);
        assert_eq!(opts.unknown_fields, UnknownFields::Ignore);
    }

    #[test]
    fn bad_option_value_names_its_path() {
        let err = from_slice_with_path::<Options>(br#"{"unknownFields": "sometimes"}"#).unwrap_err();
        assert_eq!(err.path, "unknownFields");
        assert!(err.message.contains("sometimes"), "{}", err.message);
        assert!(err.to_string().starts_with("at JSON path unknownFields"));
    }

    #[test]
    fn syntax_errors_still_surface() {
        assert!(from_str_with_path::<Options>("{").is_err());
    }
}
