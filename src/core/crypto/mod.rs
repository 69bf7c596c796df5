/*!
Cryptographic components.

This module provides the provider seam, the native provider backends, the
algorithm registries and the two mechanism handles built on top of them.
*/

// Provider backends
pub mod algorithms;

// Mechanism handles
pub mod key_encapsulation;
pub mod signature;

// Registry for algorithm management
pub mod registry;

// Provider traits
pub mod traits;

// Algorithm families and details
pub mod types;

// Re-export frequently used types
pub use algorithms::NativeProvider;
pub use key_encapsulation::KeyEncapsulation;
pub use registry::{AlgorithmRegistry, KemRegistry, Mechanisms, SignatureRegistry};
pub use signature::Signature;
pub use traits::{KemInstance, Provider, SignatureInstance, Status};
pub use types::{Family, KemDetails, KemFamily, MechanismFamily, SignatureDetails, SignatureFamily};
