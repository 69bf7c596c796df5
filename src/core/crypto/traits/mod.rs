/*!
Core traits for cryptographic operations.

This module defines the interfaces between the mechanism handles and the
provider that implements the algorithms.
*/

pub mod kem;
pub mod provider;
pub mod signature;

// Re-export core traits for easier access
pub use kem::KemInstance;
pub use provider::{Provider, Status};
pub use signature::SignatureInstance;
