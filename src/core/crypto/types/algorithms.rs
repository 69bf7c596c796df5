/*!
Algorithm family definitions.
*/

use std::fmt;

/// The two mechanism families a provider exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Key encapsulation mechanisms
    Kem,
    /// Digital signature schemes
    Signature,
}

impl Family {
    /// Human-readable name of the family
    pub fn name(&self) -> &'static str {
        match self {
            Family::Kem => "KEM",
            Family::Signature => "signature",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type-level tag tying a registry to one [`Family`]
pub trait MechanismFamily: Send + Sync + 'static {
    /// The family this marker stands for
    const FAMILY: Family;
}

/// Marker for key encapsulation registries
#[derive(Debug, Clone, Copy)]
pub enum KemFamily {}

impl MechanismFamily for KemFamily {
    const FAMILY: Family = Family::Kem;
}

/// Marker for signature registries
#[derive(Debug, Clone, Copy)]
pub enum SignatureFamily {}

impl MechanismFamily for SignatureFamily {
    const FAMILY: Family = Family::Signature;
}
