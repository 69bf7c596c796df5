/*!
Key encapsulation handle.

A [`KeyEncapsulation`] owns one provider KEM instance and at most one secret
key. A client generates a keypair and decapsulates; a server only needs the
client's public key to encapsulate, so it may never hold a key of its own.
*/

use std::fmt;

use zeroize::Zeroizing;

use crate::core::crypto::registry::KemRegistry;
use crate::core::crypto::traits::KemInstance;
use crate::core::crypto::types::KemDetails;
use crate::core::error::{Error, Result};
use crate::core::memory::SecretKey;

/// A handle on one KEM algorithm and its secret key
pub struct KeyEncapsulation {
    kem: Box<dyn KemInstance>,
    details: KemDetails,
    secret_key: SecretKey,
}

impl KeyEncapsulation {
    /// Create a handle for `name` with no secret key
    pub fn new(registry: &KemRegistry, name: &str) -> Result<Self> {
        Self::with_secret_key(registry, name, SecretKey::new())
    }

    /// Create a handle for `name` holding `secret_key`.
    ///
    /// The key length is not checked here; a wrong-sized key is reported when
    /// it is first needed.
    pub fn with_secret_key(
        registry: &KemRegistry,
        name: &str,
        secret_key: impl Into<SecretKey>,
    ) -> Result<Self> {
        let secret_key = secret_key.into();
        registry.ensure_enabled(name)?;

        let kem = registry
            .provider()
            .new_kem(name)
            .ok_or_else(|| Error::MechanismNotEnabled(name.to_string()))?;
        let details = kem.details();
        log::debug!("created key encapsulation handle for {}", details.name);

        Ok(Self {
            kem,
            details,
            secret_key,
        })
    }

    /// Algorithm details captured at construction
    pub fn details(&self) -> &KemDetails {
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
    ///
    /// The previous secret key is wiped only once the new one is in hand; if
    /// the provider fails the old key stays in place.
    pub fn generate_keypair(&mut self) -> Result<Vec<u8>> {
        let mut public_key = vec![0u8; self.details.length_public_key];
        let mut secret_key = SecretKey::zeroed(self.details.length_secret_key);

        if !self
            .kem
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

    /// Encapsulate a fresh shared secret against `public_key`.
    ///
    /// Returns the ciphertext and the shared secret. No secret key is needed.
    pub fn encap_secret(&self, public_key: &[u8]) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
        if public_key.len() != self.details.length_public_key {
            return Err(Error::InvalidKeyLength {
                expected: self.details.length_public_key,
                actual: public_key.len(),
            });
        }

        let mut ciphertext = vec![0u8; self.details.length_ciphertext];
        let mut shared_secret = Zeroizing::new(vec![0u8; self.details.length_shared_secret]);

        if !self
            .kem
            .encapsulate(&mut ciphertext, &mut shared_secret, public_key)
            .is_success()
        {
            log::warn!("{}: provider failed to encapsulate", self.details.name);
            return Err(Error::Encapsulation(self.details.name.clone()));
        }

        Ok((ciphertext, shared_secret))
    }

    /// Recover the shared secret from `ciphertext` using this handle's secret key
    pub fn decap_secret(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        if ciphertext.len() != self.details.length_ciphertext {
            return Err(Error::InvalidCiphertextLength {
                expected: self.details.length_ciphertext,
                actual: ciphertext.len(),
            });
        }
        if self.secret_key.len() != self.details.length_secret_key {
            return Err(Error::MissingOrInvalidSecretKey {
                expected: self.details.length_secret_key,
                actual: self.secret_key.len(),
            });
        }

        let mut shared_secret = Zeroizing::new(vec![0u8; self.details.length_shared_secret]);

        if !self
            .kem
            .decapsulate(&mut shared_secret, ciphertext, self.secret_key.as_bytes())
            .is_success()
        {
            log::warn!("{}: provider rejected the ciphertext", self.details.name);
            return Err(Error::Decapsulation(self.details.name.clone()));
        }

        Ok(shared_secret)
    }
}

impl Drop for KeyEncapsulation {
    fn drop(&mut self) {
        log::trace!("releasing {} instance", self.details.name);
    }
}

impl fmt::Display for KeyEncapsulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key encapsulation mechanism: {}", self.details.name)
    }
}

impl fmt::Debug for KeyEncapsulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyEncapsulation")
            .field("details", &self.details)
            .field("secret_key", &self.secret_key)
            .finish()
    }
}
