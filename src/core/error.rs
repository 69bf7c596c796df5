/*!
Error handling for the mechanism wrappers.

Errors fall into three groups: configuration errors raised when a handle is
constructed, validation errors raised before the provider is called, and
provider errors raised when the provider reports a failed operation. A
signature that does not verify is not an error.
*/

use std::fmt;
use thiserror::Error;

/// Result type for mechanism operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for mechanism operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The provider has never heard of this algorithm
    #[error("\"{0}\" is not supported by the provider")]
    MechanismNotSupported(String),

    /// The provider knows the algorithm but cannot instantiate it in this build
    #[error("\"{0}\" is not enabled by the provider")]
    MechanismNotEnabled(String),

    /// Algorithm index past the end of the catalog
    #[error("Algorithm ID out of range: {index} (count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// The provider catalog could not be enumerated
    #[error("Registry population failed: {0}")]
    RegistryPopulation(String),

    /// Public key does not have the algorithm's public key length
    #[error("Incorrect public key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Ciphertext does not have the algorithm's ciphertext length
    #[error("Incorrect ciphertext length: expected {expected} bytes, got {actual}")]
    InvalidCiphertextLength { expected: usize, actual: usize },

    /// Signature is longer than the algorithm allows
    #[error("Incorrect signature size: at most {max} bytes, got {actual}")]
    InvalidSignatureLength { max: usize, actual: usize },

    /// The handle holds no secret key, or one of the wrong length
    #[error(
        "Incorrect secret key length: expected {expected} bytes, got {actual}; \
         supply one at construction or generate a keypair"
    )]
    MissingOrInvalidSecretKey { expected: usize, actual: usize },

    /// The algorithm has no context-string variant
    #[error("\"{0}\" does not support context strings")]
    ContextStringUnsupported(String),

    /// More bytes requested than the destination can hold
    #[error("Requested {requested} bytes but the buffer holds {available}")]
    OutOfRange { requested: usize, available: usize },

    /// Provider failed to generate a keypair
    #[error("Can not generate keypair for \"{0}\"")]
    KeypairGeneration(String),

    /// Provider failed to encapsulate
    #[error("Can not encapsulate secret with \"{0}\"")]
    Encapsulation(String),

    /// Provider rejected the ciphertext against this secret key
    #[error("Can not decapsulate secret with \"{0}\"")]
    Decapsulation(String),

    /// Provider failed to sign
    #[error("Can not sign message with \"{0}\"")]
    Signing(String),
}

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Bad algorithm choice or an unusable provider catalog
    Configuration,
    /// Caller input rejected before reaching the provider
    Validation,
    /// The provider reported failure
    Provider,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Configuration => write!(f, "configuration"),
            ErrorCategory::Validation => write!(f, "validation"),
            ErrorCategory::Provider => write!(f, "provider"),
        }
    }
}

impl Error {
    /// Classify the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::MechanismNotSupported(_)
            | Error::MechanismNotEnabled(_)
            | Error::RegistryPopulation(_)
            | Error::ContextStringUnsupported(_) => ErrorCategory::Configuration,

            Error::IndexOutOfRange { .. }
            | Error::InvalidKeyLength { .. }
            | Error::InvalidCiphertextLength { .. }
            | Error::InvalidSignatureLength { .. }
            | Error::MissingOrInvalidSecretKey { .. }
            | Error::OutOfRange { .. } => ErrorCategory::Validation,

            Error::KeypairGeneration(_)
            | Error::Encapsulation(_)
            | Error::Decapsulation(_)
            | Error::Signing(_) => ErrorCategory::Provider,
        }
    }
}
