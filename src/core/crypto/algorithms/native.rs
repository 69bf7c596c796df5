/*!
The native provider, backed by the pqcrypto crate family.

The catalog order is fixed and defines the algorithm indices. Every entry is
supported; an entry is enabled only when its backend was compiled in. Some
names are listed for which this provider has no backend at all, so they are
always supported but never enabled.
*/

use crate::core::crypto::algorithms::kem::kyber;
use crate::core::crypto::algorithms::signatures::{dilithium, sphincs};
use crate::core::crypto::traits::{KemInstance, Provider, SignatureInstance};
use crate::core::crypto::types::Family;

/// Name reported by [`NativeProvider::name`]
pub const NATIVE_PROVIDER_NAME: &str = "pqcrypto";

/// Version reported by [`NativeProvider::version`]
pub const NATIVE_PROVIDER_VERSION: &str = "kyber-0.8/dilithium-0.5/sphincsplus-0.7";

struct CatalogEntry<I: ?Sized> {
    name: &'static str,
    instantiate: fn() -> Option<Box<I>>,
}

fn unavailable<I: ?Sized>() -> Option<Box<I>> {
    None
}

const KEM_CATALOG: &[CatalogEntry<dyn KemInstance>] = &[
    CatalogEntry { name: "Kyber512", instantiate: kyber::kyber512 },
    CatalogEntry { name: "Kyber768", instantiate: kyber::kyber768 },
    CatalogEntry { name: "Kyber1024", instantiate: kyber::kyber1024 },
    CatalogEntry { name: "ML-KEM-512", instantiate: unavailable },
    CatalogEntry { name: "ML-KEM-768", instantiate: unavailable },
    CatalogEntry { name: "ML-KEM-1024", instantiate: unavailable },
    CatalogEntry { name: "FrodoKEM-640-AES", instantiate: unavailable },
    CatalogEntry { name: "HQC-128", instantiate: unavailable },
    CatalogEntry { name: "Classic-McEliece-348864", instantiate: unavailable },
];

const SIGNATURE_CATALOG: &[CatalogEntry<dyn SignatureInstance>] = &[
    CatalogEntry { name: "Dilithium2", instantiate: dilithium::dilithium2 },
    CatalogEntry { name: "Dilithium3", instantiate: dilithium::dilithium3 },
    CatalogEntry { name: "Dilithium5", instantiate: dilithium::dilithium5 },
    CatalogEntry { name: "ML-DSA-44", instantiate: unavailable },
    CatalogEntry { name: "ML-DSA-65", instantiate: unavailable },
    CatalogEntry { name: "ML-DSA-87", instantiate: unavailable },
    CatalogEntry { name: "Falcon-512", instantiate: unavailable },
    CatalogEntry { name: "SPHINCS+-SHA2-128f-simple", instantiate: sphincs::sphincs_sha2_128f_simple },
    CatalogEntry { name: "SPHINCS+-SHAKE-128f-simple", instantiate: sphincs::sphincs_shake_128f_simple },
    CatalogEntry { name: "MAYO-1", instantiate: unavailable },
];

fn lookup<'a, I: ?Sized>(catalog: &'a [CatalogEntry<I>], name: &str) -> Option<&'a CatalogEntry<I>> {
    catalog.iter().find(|entry| entry.name == name)
}

/// Provider backed by the pqcrypto crates compiled into this build
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeProvider;

impl NativeProvider {
    /// Create the native provider
    pub fn new() -> Self {
        Self
    }
}

impl Provider for NativeProvider {
    fn name(&self) -> &str {
        NATIVE_PROVIDER_NAME
    }

    fn version(&self) -> &str {
        NATIVE_PROVIDER_VERSION
    }

    fn algorithm_count(&self, family: Family) -> usize {
        match family {
            Family::Kem => KEM_CATALOG.len(),
            Family::Signature => SIGNATURE_CATALOG.len(),
        }
    }

    fn algorithm_name_at(&self, family: Family, index: usize) -> Option<String> {
        let name = match family {
            Family::Kem => KEM_CATALOG.get(index).map(|entry| entry.name),
            Family::Signature => SIGNATURE_CATALOG.get(index).map(|entry| entry.name),
        };
        name.map(str::to_string)
    }

    fn new_kem(&self, name: &str) -> Option<Box<dyn KemInstance>> {
        lookup(KEM_CATALOG, name).and_then(|entry| (entry.instantiate)())
    }

    fn new_signature(&self, name: &str) -> Option<Box<dyn SignatureInstance>> {
        lookup(SIGNATURE_CATALOG, name).and_then(|entry| (entry.instantiate)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_are_unique() {
        for catalog in [
            KEM_CATALOG.iter().map(|e| e.name).collect::<Vec<_>>(),
            SIGNATURE_CATALOG.iter().map(|e| e.name).collect::<Vec<_>>(),
        ] {
            let mut sorted = catalog.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), catalog.len());
        }
    }

    #[test]
    fn test_instances_report_catalog_name() {
        let provider = NativeProvider::new();

        for entry in KEM_CATALOG {
            if let Some(kem) = provider.new_kem(entry.name) {
                assert_eq!(kem.details().name, entry.name);
            }
        }
        for entry in SIGNATURE_CATALOG {
            if let Some(sig) = provider.new_signature(entry.name) {
                assert_eq!(sig.details().name, entry.name);
            }
        }
    }

    #[test]
    fn test_unknown_and_backendless_names() {
        let provider = NativeProvider::new();

        assert!(provider.new_kem("unsupported_kem").is_none());
        assert!(provider.new_kem("ML-KEM-512").is_none());
        assert!(!provider.try_instantiate(Family::Signature, "Falcon-512"));
        assert_eq!(provider.algorithm_name_at(Family::Kem, KEM_CATALOG.len()), None);
    }

    #[cfg(feature = "kyber512")]
    #[test]
    fn test_enabled_kyber_instantiates() {
        let provider = NativeProvider::new();
        assert!(provider.try_instantiate(Family::Kem, "Kyber512"));
    }
}
