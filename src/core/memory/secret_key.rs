/*!
Owned secret key buffer that is wiped before its memory is released.

The bytes are overwritten with zeroes while the vector still owns its full
allocation, and only then is the length dropped to zero. This holds on drop,
on [`SecretKey::replace`] and on [`SecretKey::wipe`]. [`SecretKey::take`]
moves the allocation itself, so no copy of the key is left behind in the
source.
*/

use std::fmt;
use std::mem;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Secret key material owned by a mechanism handle.
#[derive(Default)]
pub struct SecretKey {
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Create an empty secret key
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Create a zero-filled buffer of `len` bytes for the provider to write into
    pub fn zeroed(len: usize) -> Self {
        Self { bytes: vec![0u8; len] }
    }

    /// Length of the key in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether no key is held
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Copy the key out into a buffer that zeroes itself on drop
    pub fn to_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.clone())
    }

    /// Zero the key bytes, then truncate to empty. The allocation is kept.
    pub fn wipe(&mut self) {
        self.bytes.zeroize();
    }

    /// Wipe the current key and adopt `other` in its place
    pub fn replace(&mut self, mut other: SecretKey) {
        self.wipe();
        self.bytes = mem::take(&mut other.bytes);
    }

    /// Move the key out, leaving this buffer empty
    pub fn take(&mut self) -> SecretKey {
        SecretKey {
            bytes: mem::take(&mut self.bytes),
        }
    }
}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.wipe();
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl From<Vec<u8>> for SecretKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for SecretKey {
    fn from(bytes: &[u8]) -> Self {
        Self { bytes: bytes.to_vec() }
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey([REDACTED; {} bytes])", self.bytes.len())
    }
}
