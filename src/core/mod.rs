//! Core components for the mechanism wrappers.
//!
//! This module contains the provider seam, the algorithm registries, the
//! KEM and signature handles, secret-key memory handling and the small
//! utilities around them.

// Export cryptographic functionality
pub mod crypto;

// Export memory handling for sensitive data
pub mod memory;

// Constants
pub mod constants;

// Error handling
pub mod error;

// Configuration presets
pub mod config;

// Random byte generation
pub mod rand;

// Thread placement
pub mod threading;

// Display helpers
pub mod format;

// Re-exports for convenience
pub use self::config::MechanismConfig;
pub use self::constants::VERSION;
pub use self::error::{Error, ErrorCategory, Result};
pub use self::format::hex_chop;
pub use self::memory::{mem_cleanse, SecretKey};
