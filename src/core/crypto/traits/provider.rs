/*!
The provider seam.

A provider is the library that actually implements the algorithms. It
enumerates its catalog per [`Family`], hands out instances for the names it
can currently instantiate, and returns `None` for the ones it cannot.
*/

use crate::core::crypto::traits::kem::KemInstance;
use crate::core::crypto::traits::signature::SignatureInstance;
use crate::core::crypto::types::Family;

/// Outcome of a provider operation
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The operation completed
    Success,
    /// The provider reported failure
    Error,
}

impl Status {
    /// Whether the operation completed
    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

impl From<bool> for Status {
    fn from(ok: bool) -> Self {
        if ok { Status::Success } else { Status::Error }
    }
}

/// A cryptographic provider
pub trait Provider: Send + Sync {
    /// Name of the provider
    fn name(&self) -> &str;

    /// Version of the provider
    fn version(&self) -> &str;

    /// Number of algorithms of `family` the provider knows about
    fn algorithm_count(&self, family: Family) -> usize;

    /// Name of the algorithm at `index`, or `None` past the end
    fn algorithm_name_at(&self, family: Family, index: usize) -> Option<String>;

    /// Instantiate a KEM, or `None` if it is not enabled
    fn new_kem(&self, name: &str) -> Option<Box<dyn KemInstance>>;

    /// Instantiate a signature scheme, or `None` if it is not enabled
    fn new_signature(&self, name: &str) -> Option<Box<dyn SignatureInstance>>;

    /// Instantiate and immediately release, reporting whether it worked
    fn try_instantiate(&self, family: Family, name: &str) -> bool {
        match family {
            Family::Kem => self.new_kem(name).is_some(),
            Family::Signature => self.new_signature(name).is_some(),
        }
    }
}
