/*!
Signature handle.

A [`Signature`] owns one provider signature instance and at most one secret
key. Signing needs the key; verification only needs the signer's public key.
A signature that fails to verify is reported as `Ok(false)`, never as an
error.
*/

use std::fmt;

use zeroize::Zeroizing;

use crate::core::crypto::registry::SignatureRegistry;
use crate::core::crypto::traits::SignatureInstance;
use crate::core::crypto::types::SignatureDetails;
use crate::core::error::{Error, Result};
use crate::core::memory::SecretKey;

/// A handle on one signature algorithm and its secret key
pub struct Signature {
    sig: Box<dyn SignatureInstance>,
    details: SignatureDetails,
    secret_key: SecretKey,
}

impl Signature {
    /// Create a handle for `name` with no secret key
    pub fn new(registry: &SignatureRegistry, name: &str) -> Result<Self> {
        Self::with_secret_key(registry, name, SecretKey::new())
    }

    /// Create a handle for `name` holding `secret_key` (length unchecked)
    pub fn with_secret_key(
        registry: &SignatureRegistry,
        name: &str,
        secret_key: impl Into<SecretKey>,
    ) -> Result<Self> {
        let secret_key = secret_key.into();
        registry.ensure_enabled(name)?;

        let sig = registry
            .provider()
            .new_signature(name)
            .ok_or_else(|| Error::MechanismNotEnabled(name.to_string()))?;
        let details = sig.details();
        log::debug!("created signature handle for {}", details.name);

        Ok(Self {
            sig,
            details,
            secret_key,
        })
    }

    /// Algorithm details captured at construction
    pub fn details(&self) -> &SignatureDetails {
        &self.details
    }

    /// Algorithm name
    pub fn algorithm_name(&self) -> &str {
        &self.details.name
    }

    /// Whether a secret key is held
    pub fn has_secret_key(&self) -> bool {
        !self.secret_key.is_empty()
    }

    /// Generate a new keypair, keep the secret key and return the public key.
    /// On failure the previous key is kept.
    pub fn generate_keypair(&mut self) -> Result<Vec<u8>> {
        let mut public_key = vec![0u8; self.details.length_public_key];
        let mut secret_key = SecretKey::zeroed(self.details.length_secret_key);

        if !self
            .sig
            .keypair(&mut public_key, secret_key.as_mut_bytes())
            .is_success()
        {
            log::warn!("{}: provider failed to generate a keypair", self.details.name);
            return Err(Error::KeypairGeneration(self.details.name.clone()));
        }

        self.secret_key.replace(secret_key);
        Ok(public_key)
    }

    /// Copy of the secret key, wiped when the copy is dropped
    pub fn export_secret_key(&self) -> Zeroizing<Vec<u8>> {
        self.secret_key.to_zeroizing()
    }

    /// Move the secret key out of the handle, leaving it with none
    pub fn take_secret_key(&mut self) -> SecretKey {
        self.secret_key.take()
    }

    fn check_secret_key(&self) -> Result<()> {
        if self.secret_key.len() != self.details.length_secret_key {
            return Err(Error::MissingOrInvalidSecretKey {
                expected: self.details.length_secret_key,
                actual: self.secret_key.len(),
            });
        }
        Ok(())
    }

    fn check_verify_inputs(&self, signature: &[u8], public_key: &[u8]) -> Result<()> {
        if public_key.len() != self.details.length_public_key {
            return Err(Error::InvalidKeyLength {
                expected: self.details.length_public_key,
                actual: public_key.len(),
            });
        }
        if signature.len() > self.details.max_length_signature {
            return Err(Error::InvalidSignatureLength {
                max: self.details.max_length_signature,
                actual: signature.len(),
            });
        }
        Ok(())
    }

    fn check_context_support(&self) -> Result<()> {
        if !self.details.supports_context_string {
            return Err(Error::ContextStringUnsupported(self.details.name.clone()));
        }
        Ok(())
    }

    // The provider reports how much of the buffer it filled.
    fn finish_signature(&self, mut signature: Vec<u8>, signature_len: usize) -> Result<Vec<u8>> {
        if signature_len > signature.len() {
            log::warn!(
                "{}: provider reported a {} byte signature for a {} byte buffer",
                self.details.name,
                signature_len,
                signature.len()
            );
            return Err(Error::Signing(self.details.name.clone()));
        }
        signature.truncate(signature_len);
        Ok(signature)
    }

    /// Sign `message` with this handle's secret key.
    ///
    /// The result may be shorter than `max_length_signature`.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        self.check_secret_key()?;

        let mut signature = vec![0u8; self.details.max_length_signature];
        let mut signature_len = 0usize;

        if !self
            .sig
            .sign(&mut signature, &mut signature_len, message, self.secret_key.as_bytes())
            .is_success()
        {
            log::warn!("{}: provider failed to sign", self.details.name);
            return Err(Error::Signing(self.details.name.clone()));
        }

        self.finish_signature(signature, signature_len)
    }

    /// Sign `message` bound to `context`
    pub fn sign_with_context(&self, message: &[u8], context: &[u8]) -> Result<Vec<u8>> {
        self.check_context_support()?;
        self.check_secret_key()?;

        let mut signature = vec![0u8; self.details.max_length_signature];
        let mut signature_len = 0usize;

        if !self
            .sig
            .sign_with_context(
                &mut signature,
                &mut signature_len,
                message,
                context,
                self.secret_key.as_bytes(),
            )
            .is_success()
        {
            log::warn!("{}: provider failed to sign with context", self.details.name);
            return Err(Error::Signing(self.details.name.clone()));
        }

        self.finish_signature(signature, signature_len)
    }

    /// Check `signature` over `message` against `public_key`.
    ///
    /// Malformed inputs are errors; a well-formed but invalid signature is
    /// `Ok(false)`.
    pub fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        self.check_verify_inputs(signature, public_key)?;
        Ok(self.sig.verify(message, signature, public_key).is_success())
    }

    /// Check a signature made with [`Signature::sign_with_context`]
    pub fn verify_with_context(
        &self,
        message: &[u8],
        signature: &[u8],
        context: &[u8],
        public_key: &[u8],
    ) -> Result<bool> {
        self.check_context_support()?;
        self.check_verify_inputs(signature, public_key)?;
        Ok(self
            .sig
            .verify_with_context(message, signature, context, public_key)
            .is_success())
    }
}

impl Drop for Signature {
    fn drop(&mut self) {
        log::trace!("releasing {} instance", self.details.name);
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature mechanism: {}", self.details.name)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("details", &self.details)
            .field("secret_key", &self.secret_key)
            .finish()
    }
}
