use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in")]
    NotAuthenticated,

    #[error("session expired")]
    TokenExpired,

    #[error("role '{role}' may not open {area}")]
    Forbidden { role: String, area: String },

    #[error("session store error: {0}")]
    TokenStoreError(String),

    #[error("{0}")]
    Other(String),
}
