/*!
Traits for signature operations.
*/

use crate::core::crypto::traits::provider::Status;
use crate::core::crypto::types::SignatureDetails;

/// One instantiated signature algorithm. Dropping it releases the instance.
pub trait SignatureInstance: Send {
    /// Metadata of this algorithm
    fn details(&self) -> SignatureDetails;

    /// Generate a key pair into `public_key` and `secret_key`
    fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> Status;

    /// Sign `message` into `signature`, storing the actual length in `signature_len`
    fn sign(
        &self,
        signature: &mut [u8],
        signature_len: &mut usize,
        message: &[u8],
        secret_key: &[u8],
    ) -> Status;

    /// Check `signature` over `message` against `public_key`
    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Status;

    /// Sign with a context string. Schemes without context support fail.
    fn sign_with_context(
        &self,
        signature: &mut [u8],
        signature_len: &mut usize,
        message: &[u8],
        context: &[u8],
        secret_key: &[u8],
    ) -> Status {
        let _ = (signature, signature_len, message, context, secret_key);
        Status::Error
    }

    /// Verify with a context string. Schemes without context support fail.
    fn verify_with_context(
        &self,
        message: &[u8],
        signature: &[u8],
        context: &[u8],
        public_key: &[u8],
    ) -> Status {
        let _ = (message, signature, context, public_key);
        Status::Error
    }
}
