/*!
# PQC Mechanisms

Object-oriented wrappers over post-quantum key encapsulation mechanisms and
digital signature schemes.

## Overview

This library provides:

- A [`Provider`] trait behind which the algorithm implementations live
- A native provider backed by the `pqcrypto` crates (CRYSTALS-Kyber,
  CRYSTALS-Dilithium and, with the `sphincsplus` feature, SPHINCS+)
- Registries that report which algorithm names are supported and which are
  enabled in the current build
- [`KeyEncapsulation`] and [`Signature`] handles that own one algorithm
  instance and, optionally, a secret key
- Secret keys that are wiped from memory when dropped
- Random byte generation with a switchable source

## Example

```no_run
use pqc_mechanisms::{KeyEncapsulation, Mechanisms};

let mechanisms = Mechanisms::native();
let mut server = KeyEncapsulation::new(mechanisms.kems(), "Kyber768")?;
let public_key = server.generate_keypair()?;

let client = KeyEncapsulation::new(mechanisms.kems(), "Kyber768")?;
let (ciphertext, client_secret) = client.encap_secret(&public_key)?;
let server_secret = server.decap_secret(&ciphertext)?;
assert_eq!(*client_secret, *server_secret);
# Ok::<(), pqc_mechanisms::Error>(())
```
*/

// Core components
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::config::MechanismConfig;
pub use crate::core::constants::{DEFAULT_KEM, DEFAULT_SIGNATURE, NO_THREAD_PATTERNS, VERSION, sizes};
pub use crate::core::error::{Error, ErrorCategory, Result};
pub use crate::core::format::{HexChop, hex_chop};
pub use crate::core::memory::{SecretKey, Zeroizing, mem_cleanse};

// Re-export handles, registries and provider seam
pub use crate::core::crypto::{
    AlgorithmRegistry, Family, KemDetails, KemInstance, KemRegistry, KeyEncapsulation, Mechanisms,
    NativeProvider, Provider, Signature, SignatureDetails, SignatureInstance, SignatureRegistry,
    Status,
};

pub use crate::core::rand;
pub use crate::core::threading;
