#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_from_json_error() {
        let error = serde_json::from_str::<u32>("x").unwrap_err();
        let message = error.to_string();
        assert!(matches!(
            DecodeError::from(error),
            DecodeError::Json(error) if error.to_string() == message
        ));
    }
}
