use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaddockError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{kind} not found")]
    NotFound { kind: &'static str, id: i32 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PaddockError {
    pub fn driver_not_found(id: i32) -> Self {
        PaddockError::NotFound {
            kind: "Driver",
            id,
        }
    }

    /// Machine-readable code attached to GraphQL error entries.
    pub fn code(&self) -> &'static str {
        match self {
            PaddockError::NotFound { .. } => "NOT_FOUND",
            PaddockError::Validation(_) => "BAD_USER_INPUT",
            _ => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ErrorExtensions for PaddockError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            if let PaddockError::NotFound { id, .. } = self {
                e.set("id", *id);
            }
        })
    }
}

pub type Result<T> = std::result::Result<T, PaddockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = PaddockError::driver_not_found(7);
        assert_eq!(err.to_string(), "Driver not found");
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_graphql_extension_code() {
        let err = PaddockError::Validation("unknown winner".to_string()).extend();
        assert_eq!(err.message, "Validation error: unknown winner");
        let extensions = serde_json::to_value(err.extensions).unwrap();
        assert_eq!(extensions["code"], "BAD_USER_INPUT");
    }
}
