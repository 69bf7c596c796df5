/*!
Mechanism configuration.

This module provides presets for the default KEM and signature algorithms
and the list of algorithm-name patterns that must run on the caller's thread.
*/

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_KEM, DEFAULT_SIGNATURE, NO_THREAD_PATTERNS};
use crate::core::crypto::registry::Mechanisms;
use crate::core::error::Result;
use crate::core::threading;

/// Configuration for choosing mechanisms
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct MechanismConfig {
    /// KEM algorithm name
    pub default_kem: String,
    /// Signature algorithm name
    pub default_signature: String,
    /// Name substrings of algorithms that must not run on worker threads
    pub no_thread_patterns: Vec<String>,
}

impl Default for MechanismConfig {
    fn default() -> Self {
        Self::with_algorithms(DEFAULT_KEM, DEFAULT_SIGNATURE)
    }
}

impl MechanismConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with specific algorithms
    pub fn with_algorithms(kem: &str, signature: &str) -> Self {
        Self {
            default_kem: kem.to_string(),
            default_signature: signature.to_string(),
            no_thread_patterns: NO_THREAD_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Create a configuration for resource-constrained environments
    pub fn lightweight() -> Self {
        Self::with_algorithms("Kyber512", "Dilithium2")
    }

    /// Create a configuration for the highest security level
    pub fn high_security() -> Self {
        Self::with_algorithms("Kyber1024", "Dilithium5")
    }

    /// Check that both algorithms are enabled in `mechanisms`
    pub fn validate(&self, mechanisms: &Mechanisms) -> Result<()> {
        mechanisms.kems().ensure_enabled(&self.default_kem)?;
        mechanisms.signatures().ensure_enabled(&self.default_signature)
    }

    /// Whether `name` must run on the caller's thread
    pub fn requires_caller_thread(&self, name: &str) -> bool {
        threading::requires_caller_thread(name, &self.no_thread_patterns)
    }
}
