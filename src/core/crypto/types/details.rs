/*!
Algorithm metadata captured from a provider instance.

A handle snapshots these once at construction; every length check it performs
afterwards is made against the snapshot.
*/

use std::fmt;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// KEM algorithm details
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct KemDetails {
    /// Algorithm name
    pub name: String,
    /// Version of the implementation
    pub version: String,
    /// Claimed NIST security level (1-5)
    pub claimed_nist_level: u8,
    /// Whether the scheme claims IND-CCA security
    pub is_ind_cca: bool,
    /// Public key length in bytes
    pub length_public_key: usize,
    /// Secret key length in bytes
    pub length_secret_key: usize,
    /// Ciphertext length in bytes
    pub length_ciphertext: usize,
    /// Shared secret length in bytes
    pub length_shared_secret: usize,
}

impl fmt::Display for KemDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "Claimed NIST level: {}", self.claimed_nist_level)?;
        writeln!(f, "Is IND_CCA: {}", self.is_ind_cca)?;
        writeln!(f, "Length public key (bytes): {}", self.length_public_key)?;
        writeln!(f, "Length secret key (bytes): {}", self.length_secret_key)?;
        writeln!(f, "Length ciphertext (bytes): {}", self.length_ciphertext)?;
        write!(f, "Length shared secret (bytes): {}", self.length_shared_secret)
    }
}

/// Signature algorithm details
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct SignatureDetails {
    /// Algorithm name
    pub name: String,
    /// Version of the implementation
    pub version: String,
    /// Claimed NIST security level (1-5)
    pub claimed_nist_level: u8,
    /// Whether the scheme claims EUF-CMA security
    pub is_euf_cma: bool,
    /// Whether signing and verification accept a context string
    pub supports_context_string: bool,
    /// Public key length in bytes
    pub length_public_key: usize,
    /// Secret key length in bytes
    pub length_secret_key: usize,
    /// Upper bound on signature length; actual signatures may be shorter
    pub max_length_signature: usize,
}

impl fmt::Display for SignatureDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "Claimed NIST level: {}", self.claimed_nist_level)?;
        writeln!(f, "Is EUF_CMA: {}", self.is_euf_cma)?;
        writeln!(f, "Supports context string: {}", self.supports_context_string)?;
        writeln!(f, "Length public key (bytes): {}", self.length_public_key)?;
        writeln!(f, "Length secret key (bytes): {}", self.length_secret_key)?;
        write!(f, "Maximum length signature (bytes): {}", self.max_length_signature)
    }
}
