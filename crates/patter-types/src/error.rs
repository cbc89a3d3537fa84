use thiserror::Error;

/// Errors for session lookup and recording.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SessionError::NotFound;
        assert_eq!(err.to_string(), "session not found");
    }
}
