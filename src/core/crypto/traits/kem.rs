/*!
Traits for key encapsulation operations.

This is the provider-side view of one KEM algorithm instance. Output buffers
are allocated by the caller at the lengths given by [`KemInstance::details`];
the instance writes into them and reports a [`Status`].
*/

use crate::core::crypto::traits::provider::Status;
use crate::core::crypto::types::KemDetails;

/// One instantiated KEM algorithm. Dropping it releases the instance.
pub trait KemInstance: Send {
    /// Metadata of this algorithm
    fn details(&self) -> KemDetails;

    /// Generate a key pair into `public_key` and `secret_key`
    fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> Status;

    /// Encapsulate a fresh shared secret against `public_key`
    fn encapsulate(&self, ciphertext: &mut [u8], shared_secret: &mut [u8], public_key: &[u8]) -> Status;

    /// Recover the shared secret from `ciphertext` with `secret_key`
    fn decapsulate(&self, shared_secret: &mut [u8], ciphertext: &[u8], secret_key: &[u8]) -> Status;
}
