use thiserror::Error;

/// Errors surfaced by the domain services
#[derive(Debug, Error)]
pub enum CampError {
    /// Payload failed a field or relationship rule
    #[error("validation failed: {0}")]
    Validation(String),

    /// Lookup by id found nothing; holds the entity name, e.g. "Camper"
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type CampResult<T> = Result<T, CampError>;
