//! Error types for the fieldgate object model

/// Result type for schema construction
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema construction error. Misdeclared schemas are programming errors and
/// fail loudly at build time; nothing past construction returns this.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Two fields share a name
    #[error("duplicate field '{0}'")]
    DuplicateField(String),

    /// Two methods share a name
    #[error("duplicate method '{0}'")]
    DuplicateMethod(String),
}

/// Method invocation error. A body reports failure by returning
/// `InvokeError::Raised`; callers classify it as a rejection, never a panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvokeError {
    /// The method body signalled a failure
    #[error("method raised: {0}")]
    Raised(String),

    /// No body is bound at the requested vtable slot
    #[error("method slot {0} has no bound body")]
    UnboundSlot(usize),
}

impl InvokeError {
    /// Shorthand for a raised body failure
    pub fn raised(message: impl Into<String>) -> Self {
        InvokeError::Raised(message.into())
    }
}
