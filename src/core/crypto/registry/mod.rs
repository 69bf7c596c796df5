/*!
Registry for provider algorithms.

This module provides the per-family catalogs of supported and enabled
algorithm names, populated once and read many times.
*/

pub mod manager;

// Re-export registry manager types
pub use manager::{
    AlgorithmRegistry,
    KemRegistry,
    Mechanisms,
    SignatureRegistry,
};
