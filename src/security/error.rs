use thiserror::Error;

/// Errors raised while describing or authorizing a management operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SecurityError {
    /// A resource name did not match any known resource.
    #[error("unknown resource name: {name}")]
    UnknownResource {
        /// The name that failed to parse.
        name: String,
    },

    /// An operation name did not match any known operation.
    #[error("unknown operation name: {name}")]
    UnknownOperation {
        /// The name that failed to parse.
        name: String,
    },

    /// The access controller denied the operation.
    #[error("access denied for {identity}")]
    AccessDenied {
        /// Identity string of the denied operation.
        identity: String,
    },
}
