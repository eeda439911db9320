//! Error types for `katacore-core`.

/// Errors from loading a site configuration override.
#[derive(Debug, thiserror::Error)]
pub enum SiteConfigError {
    /// The override file could not be read.
    #[error("failed to read site config '{path}': {reason}")]
    Read { path: String, reason: String },

    /// The override file is not a valid site config document.
    #[error("invalid site config '{path}': {reason}")]
    Parse { path: String, reason: String },
}

/// Errors from the session store.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A session needs at least a name or an email to greet the visitor with.
    #[error("a session requires a name or an email")]
    MissingIdentity,

    /// The requested lifetime is zero or negative.
    #[error("invalid session ttl: {reason}")]
    InvalidTtl { reason: String },
}
