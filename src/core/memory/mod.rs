/*!
Memory handling for sensitive data.

Secret key material lives in [`SecretKey`], which zeroes itself before its
memory is released. Zeroing goes through the `zeroize` crate so the writes
cannot be elided by the optimiser.
*/

pub mod secret_key;

pub use secret_key::SecretKey;
pub use zeroize::{Zeroize, Zeroizing};

/// Securely zero a buffer in place, keeping its length.
pub fn mem_cleanse(memory: &mut [u8]) {
    memory.zeroize();
}
