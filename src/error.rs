use thiserror::Error;

/// Failure of a single relayed generation call.
///
/// Display strings are caller-safe: they never carry the backend's response body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("inference backend is unreachable")]
    BackendUnreachable,

    #[error("inference backend rejected the request (status {status})")]
    BackendRejected { status: u16 },

    #[error("internal relay error")]
    InternalError,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid allowed origin '{0}'")]
    InvalidOrigin(String),

    #[error("Invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("Invalid field assignment '{0}', expected name=value")]
    InvalidAssignment(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Generation Failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_every_name() {
        let err = CatalogError::MissingFields(vec!["subject".into(), "message".into()]);
        assert_eq!(err.to_string(), "Missing required fields: subject, message");
    }

    #[test]
    fn rejected_display_only_carries_status() {
        let err = GenerationError::BackendRejected { status: 500 };
        assert_eq!(
            err.to_string(),
            "inference backend rejected the request (status 500)"
        );
    }
}
