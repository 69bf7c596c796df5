//! Test provider with a configurable catalog and toy algorithms.
//!
//! The algorithms here only need to be internally consistent; they are not
//! secure in any way.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use pqc_mechanisms::{
    Family, KemDetails, KemInstance, Mechanisms, Provider, SignatureDetails, SignatureInstance,
    Status,
};
use rand::RngCore;

pub const MOCK_KEM: &str = "Mock-KEM-A";
pub const MOCK_KEM_UNBUILT: &str = "Mock-KEM-Unbuilt";
pub const MOCK_SIG: &str = "Mock-SIG-A";
pub const MOCK_SIG_CTX: &str = "Mock-SIG-Ctx";
pub const MOCK_SIG_UNBUILT: &str = "Mock-SIG-Unbuilt";

pub const KEY_BYTES: usize = 16;
pub const TAG_BYTES: usize = 16;
pub const MAX_SIGNATURE_BYTES: usize = 32;

/// Switches and counters shared between a [`MockProvider`] and its instances
#[derive(Debug, Default)]
pub struct MockFlags {
    pub fail_keypair: AtomicBool,
    pub fail_encapsulate: AtomicBool,
    pub fail_decapsulate: AtomicBool,
    pub fail_sign: AtomicBool,
    /// Report one byte more signature than the output buffer holds
    pub overlong_signature: AtomicBool,
    pub count_calls: AtomicUsize,
    pub instantiations: AtomicUsize,
}

impl MockFlags {
    pub fn set(flag: &AtomicBool, value: bool) {
        flag.store(value, Ordering::SeqCst);
    }

    fn is_set(flag: &AtomicBool) -> bool {
        flag.load(Ordering::SeqCst)
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    pub fn instantiations(&self) -> usize {
        self.instantiations.load(Ordering::SeqCst)
    }
}

struct Entry {
    name: String,
    buildable: bool,
    context: bool,
}

impl Entry {
    fn new(name: &str, buildable: bool, context: bool) -> Self {
        Self {
            name: name.to_string(),
            buildable,
            context,
        }
    }
}

pub struct MockProvider {
    kems: Vec<Entry>,
    signatures: Vec<Entry>,
    flags: Arc<MockFlags>,
    overstate_count: bool,
    reported_count: Option<usize>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            kems: vec![
                Entry::new(MOCK_KEM, true, false),
                Entry::new(MOCK_KEM_UNBUILT, false, false),
            ],
            signatures: vec![
                Entry::new(MOCK_SIG, true, false),
                Entry::new(MOCK_SIG_CTX, true, true),
                Entry::new(MOCK_SIG_UNBUILT, false, false),
            ],
            flags: Arc::new(MockFlags::default()),
            overstate_count: false,
            reported_count: None,
        }
    }

    /// Report one more algorithm than the catalog holds
    pub fn overstating_count(mut self) -> Self {
        self.overstate_count = true;
        self
    }

    /// Report `count` algorithms per family regardless of the catalog
    pub fn reporting_count(mut self, count: usize) -> Self {
        self.reported_count = Some(count);
        self
    }

    /// List the first KEM a second time
    pub fn with_duplicate_kem(mut self) -> Self {
        self.kems.push(Entry::new(MOCK_KEM, true, false));
        self
    }

    pub fn flags(&self) -> Arc<MockFlags> {
        Arc::clone(&self.flags)
    }

    /// Registries over this provider, plus a handle on its flags
    pub fn mechanisms(self) -> (Mechanisms, Arc<MockFlags>) {
        let flags = self.flags();
        (Mechanisms::new(Arc::new(self)), flags)
    }

    fn entries(&self, family: Family) -> &[Entry] {
        match family {
            Family::Kem => &self.kems,
            Family::Signature => &self.signatures,
        }
    }

    fn buildable(&self, family: Family, name: &str) -> Option<&Entry> {
        self.flags.instantiations.fetch_add(1, Ordering::SeqCst);
        self.entries(family)
            .iter()
            .find(|entry| entry.name == name && entry.buildable)
    }
}

impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn version(&self) -> &str {
        "0.0.1"
    }

    fn algorithm_count(&self, family: Family) -> usize {
        self.flags.count_calls.fetch_add(1, Ordering::SeqCst);
        self.reported_count
            .unwrap_or_else(|| self.entries(family).len() + usize::from(self.overstate_count))
    }

    fn algorithm_name_at(&self, family: Family, index: usize) -> Option<String> {
        self.entries(family).get(index).map(|entry| entry.name.clone())
    }

    fn new_kem(&self, name: &str) -> Option<Box<dyn KemInstance>> {
        let entry = self.buildable(Family::Kem, name)?;
        Some(Box::new(XorKem {
            name: entry.name.clone(),
            flags: self.flags(),
        }))
    }

    fn new_signature(&self, name: &str) -> Option<Box<dyn SignatureInstance>> {
        let entry = self.buildable(Family::Signature, name)?;
        Some(Box::new(KeyedTagSignature {
            name: entry.name.clone(),
            context: entry.context,
            flags: self.flags(),
        }))
    }
}

fn xor_into(dst: &mut [u8], a: &[u8], b: &[u8]) {
    for ((d, x), y) in dst.iter_mut().zip(a).zip(b) {
        *d = x ^ y;
    }
}

/// KEM whose public key equals its secret key and whose ciphertext is the
/// shared secret XOR the key
struct XorKem {
    name: String,
    flags: Arc<MockFlags>,
}

impl KemInstance for XorKem {
    fn details(&self) -> KemDetails {
        KemDetails {
            name: self.name.clone(),
            version: "toy".to_string(),
            claimed_nist_level: 1,
            is_ind_cca: false,
            length_public_key: KEY_BYTES,
            length_secret_key: KEY_BYTES,
            length_ciphertext: KEY_BYTES,
            length_shared_secret: KEY_BYTES,
        }
    }

    fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> Status {
        if MockFlags::is_set(&self.flags.fail_keypair) {
            return Status::Error;
        }
        rand::rng().fill_bytes(secret_key);
        public_key.copy_from_slice(secret_key);
        Status::Success
    }

    fn encapsulate(&self, ciphertext: &mut [u8], shared_secret: &mut [u8], public_key: &[u8]) -> Status {
        if MockFlags::is_set(&self.flags.fail_encapsulate) {
            return Status::Error;
        }
        rand::rng().fill_bytes(shared_secret);
        xor_into(ciphertext, shared_secret, public_key);
        Status::Success
    }

    fn decapsulate(&self, shared_secret: &mut [u8], ciphertext: &[u8], secret_key: &[u8]) -> Status {
        if MockFlags::is_set(&self.flags.fail_decapsulate) {
            return Status::Error;
        }
        xor_into(shared_secret, ciphertext, secret_key);
        Status::Success
    }
}

/// Signature whose tag is a keyed fold over the (context-prefixed) message
struct KeyedTagSignature {
    name: String,
    context: bool,
    flags: Arc<MockFlags>,
}

fn tag(key: &[u8], context: Option<&[u8]>, message: &[u8]) -> [u8; TAG_BYTES] {
    let mut prefix = Vec::new();
    if let Some(context) = context {
        prefix.push(1u8);
        prefix.push(context.len() as u8);
        prefix.extend_from_slice(context);
    }

    let mut out = [0u8; TAG_BYTES];
    for (i, byte) in out.iter_mut().enumerate() {
        let folded = prefix
            .iter()
            .chain(message)
            .fold(i as u8, |acc, b| acc.wrapping_mul(31).wrapping_add(*b));
        *byte = key[i] ^ folded;
    }
    out
}

impl KeyedTagSignature {
    fn write_tag(&self, signature: &mut [u8], signature_len: &mut usize, tag: [u8; TAG_BYTES]) -> Status {
        if MockFlags::is_set(&self.flags.fail_sign) {
            return Status::Error;
        }
        signature[..TAG_BYTES].copy_from_slice(&tag);
        *signature_len = if MockFlags::is_set(&self.flags.overlong_signature) {
            signature.len() + 1
        } else {
            TAG_BYTES
        };
        Status::Success
    }
}

impl SignatureInstance for KeyedTagSignature {
    fn details(&self) -> SignatureDetails {
        SignatureDetails {
            name: self.name.clone(),
            version: "toy".to_string(),
            claimed_nist_level: 1,
            is_euf_cma: false,
            supports_context_string: self.context,
            length_public_key: KEY_BYTES,
            length_secret_key: KEY_BYTES,
            max_length_signature: MAX_SIGNATURE_BYTES,
        }
    }

    fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> Status {
        if MockFlags::is_set(&self.flags.fail_keypair) {
            return Status::Error;
        }
        rand::rng().fill_bytes(secret_key);
        public_key.copy_from_slice(secret_key);
        Status::Success
    }

    fn sign(&self, signature: &mut [u8], signature_len: &mut usize, message: &[u8], secret_key: &[u8]) -> Status {
        self.write_tag(signature, signature_len, tag(secret_key, None, message))
    }

    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Status {
        Status::from(signature == tag(public_key, None, message).as_slice())
    }

    fn sign_with_context(
        &self,
        signature: &mut [u8],
        signature_len: &mut usize,
        message: &[u8],
        context: &[u8],
        secret_key: &[u8],
    ) -> Status {
        if !self.context {
            return Status::Error;
        }
        self.write_tag(signature, signature_len, tag(secret_key, Some(context), message))
    }

    fn verify_with_context(&self, message: &[u8], signature: &[u8], context: &[u8], public_key: &[u8]) -> Status {
        if !self.context {
            return Status::Error;
        }
        Status::from(signature == tag(public_key, Some(context), message).as_slice())
    }
}
