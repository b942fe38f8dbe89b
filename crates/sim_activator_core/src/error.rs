use thiserror::Error;

/// Errors surfaced by the store and the query service.
#[derive(Debug, Error)]
pub enum SimActivatorError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("persistence error: {0}")]
    Persistence(#[source] anyhow::Error),
}

impl SimActivatorError {
    pub fn persistence(err: impl Into<anyhow::Error>) -> Self {
        Self::Persistence(err.into())
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::InvalidInput(_) => 400,
            Self::Persistence(_) => 500,
        }
    }
}

/// Classified failure of the outbound actuator call.
///
/// None of these abort the workflow; each one still produces a record with
/// `active = false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActuatorError {
    #[error("actuator returned HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("actuator unreachable: {0}")]
    Unreachable(String),

    #[error("malformed actuator response: {0}")]
    Malformed(String),
}

impl ActuatorError {
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Rejected { .. } => 502,
            Self::Unreachable(_) => 503,
            Self::Malformed(_) => 502,
        }
    }

    /// Stable wire tag for the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "rejected",
            Self::Unreachable(_) => "unreachable",
            Self::Malformed(_) => "malformed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_not_found() {
        assert_eq!(SimActivatorError::NotFound("x".into()).http_status(), 404);
    }

    #[test]
    fn http_status_invalid_input() {
        assert_eq!(SimActivatorError::InvalidInput("x".into()).http_status(), 400);
    }

    #[test]
    fn http_status_persistence() {
        let err = SimActivatorError::persistence(anyhow::anyhow!("connection reset"));
        assert_eq!(err.http_status(), 500);
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn actuator_http_status() {
        let rejected = ActuatorError::Rejected {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(rejected.http_status(), 502);
        assert_eq!(ActuatorError::Unreachable("x".into()).http_status(), 503);
        assert_eq!(ActuatorError::Malformed("x".into()).http_status(), 502);
    }

    #[test]
    fn actuator_kind_tags() {
        let rejected = ActuatorError::Rejected {
            status: 404,
            body: String::new(),
        };
        assert_eq!(rejected.kind(), "rejected");
        assert_eq!(ActuatorError::Unreachable("x".into()).kind(), "unreachable");
        assert_eq!(ActuatorError::Malformed("x".into()).kind(), "malformed");
    }
}
