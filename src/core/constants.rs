/*!
Constants for the mechanism wrappers.
*/

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// KEM used when nothing else is configured
pub const DEFAULT_KEM: &str = "Kyber768";

/// Signature scheme used when nothing else is configured
pub const DEFAULT_SIGNATURE: &str = "Dilithium3";

/// Algorithm-name substrings whose native code needs more stack than a
/// worker thread gets; these run on the caller's thread.
pub const NO_THREAD_PATTERNS: &[&str] = &[
    "SPHINCS+",
    "Falcon",
    "MAYO",
    "cross-rsdp",
    "Classic-McEliece",
    "LEDAcryptKEM",
];

/// Size constants for the algorithms the native provider can instantiate
pub mod sizes {
    /// CRYSTALS-Kyber constants
    pub mod kyber {
        /// Size of Kyber shared secret in bytes
        pub const SHARED_SECRET_BYTES: usize = 32;

        /// Size of Kyber768 public key in bytes
        pub const PUBLIC_KEY_BYTES_768: usize = 1184;

        /// Size of Kyber768 secret key in bytes
        pub const SECRET_KEY_BYTES_768: usize = 2400;

        /// Size of Kyber768 ciphertext in bytes
        pub const CIPHERTEXT_BYTES_768: usize = 1088;
    }

    /// CRYSTALS-Dilithium constants
    pub mod dilithium {
        /// Size of Dilithium3 public key in bytes
        pub const PUBLIC_KEY_BYTES_3: usize = 1952;

        /// Size of Dilithium3 signature in bytes
        pub const SIGNATURE_BYTES_3: usize = 3293;
    }
}
