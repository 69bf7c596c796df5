/*!
Registry manager for provider algorithms.

A registry enumerates one family of the provider's catalog exactly once, on
first use, and keeps two ordered lists: every name the provider knows
("supported") and the subset it can instantiate right now ("enabled"). The
only way to learn whether a name is enabled is to instantiate it and release
it again; each name is tried once.
*/

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::core::crypto::algorithms::NativeProvider;
use crate::core::crypto::traits::Provider;
use crate::core::crypto::types::{Family, KemFamily, MechanismFamily, SignatureFamily};
use crate::core::error::{Error, Result};

/// Registry of KEM algorithms
pub type KemRegistry = AlgorithmRegistry<KemFamily>;

/// Registry of signature algorithms
pub type SignatureRegistry = AlgorithmRegistry<SignatureFamily>;

/// Memoized result of enumerating the provider
#[derive(Debug)]
struct Catalog {
    supported: Vec<String>,
    enabled: Vec<String>,
}

impl Catalog {
    fn populate(family: Family, provider: &dyn Provider) -> Result<Self> {
        let count = provider.algorithm_count(family);
        // The count is untrusted until every index resolves to a name.
        let mut supported = Vec::new();
        let mut seen = HashSet::new();

        for index in 0..count {
            let name = provider.algorithm_name_at(family, index).ok_or_else(|| {
                Error::RegistryPopulation(format!(
                    "{} reports {} {} algorithms but has no name at index {}",
                    provider.name(),
                    count,
                    family,
                    index
                ))
            })?;
            if !seen.insert(name.clone()) {
                return Err(Error::RegistryPopulation(format!(
                    "{} lists {} algorithm \"{}\" twice",
                    provider.name(),
                    family,
                    name
                )));
            }
            supported.push(name);
        }

        let enabled: Vec<String> = supported
            .iter()
            .filter(|name| provider.try_instantiate(family, name))
            .cloned()
            .collect();

        log::debug!(
            "populated {} registry from {}: {} supported, {} enabled",
            family,
            provider.name(),
            supported.len(),
            enabled.len()
        );

        Ok(Self { supported, enabled })
    }
}

/// Registry of one family of provider algorithms
pub struct AlgorithmRegistry<F: MechanismFamily> {
    provider: Arc<dyn Provider>,
    catalog: OnceCell<Catalog>,
    _family: PhantomData<F>,
}

impl<F: MechanismFamily> AlgorithmRegistry<F> {
    /// Create a registry over `provider`. Nothing is enumerated until first use.
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            catalog: OnceCell::new(),
            _family: PhantomData,
        }
    }

    /// The family this registry enumerates
    pub fn family(&self) -> Family {
        F::FAMILY
    }

    /// The provider behind this registry
    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.provider
    }

    // Concurrent first callers block until the single population pass ends.
    // A failed pass is not cached.
    fn catalog(&self) -> Result<&Catalog> {
        self.catalog
            .get_or_try_init(|| Catalog::populate(F::FAMILY, self.provider.as_ref()))
    }

    /// Number of algorithms the provider knows about
    pub fn count(&self) -> Result<usize> {
        Ok(self.catalog()?.supported.len())
    }

    /// All algorithm names, in provider index order
    pub fn supported(&self) -> Result<&[String]> {
        Ok(&self.catalog()?.supported)
    }

    /// Names the provider can instantiate, in provider index order
    pub fn enabled(&self) -> Result<&[String]> {
        Ok(&self.catalog()?.enabled)
    }

    /// Whether the provider knows `name`
    pub fn is_supported(&self, name: &str) -> Result<bool> {
        Ok(self.catalog()?.supported.iter().any(|n| n == name))
    }

    /// Whether the provider can instantiate `name`
    pub fn is_enabled(&self, name: &str) -> Result<bool> {
        Ok(self.catalog()?.enabled.iter().any(|n| n == name))
    }

    /// Name of the algorithm with numerical id `index`
    pub fn name_at(&self, index: usize) -> Result<&str> {
        let supported = &self.catalog()?.supported;
        supported
            .get(index)
            .map(String::as_str)
            .ok_or(Error::IndexOutOfRange {
                index,
                count: supported.len(),
            })
    }

    /// Fail with the right configuration error unless `name` is enabled
    pub fn ensure_enabled(&self, name: &str) -> Result<()> {
        if self.is_enabled(name)? {
            Ok(())
        } else if self.is_supported(name)? {
            Err(Error::MechanismNotEnabled(name.to_string()))
        } else {
            Err(Error::MechanismNotSupported(name.to_string()))
        }
    }
}

impl<F: MechanismFamily> fmt::Debug for AlgorithmRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("family", &F::FAMILY)
            .field("provider", &self.provider.name())
            .field("populated", &self.catalog.get().is_some())
            .finish()
    }
}

/// The KEM and signature registries of one provider
#[derive(Debug)]
pub struct Mechanisms {
    kems: KemRegistry,
    signatures: SignatureRegistry,
}

impl Mechanisms {
    /// Build both registries over a shared provider
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        log::info!("using provider {} {}", provider.name(), provider.version());
        Self {
            kems: KemRegistry::new(Arc::clone(&provider)),
            signatures: SignatureRegistry::new(provider),
        }
    }

    /// Build both registries over the native provider
    pub fn native() -> Self {
        Self::new(Arc::new(NativeProvider::new()))
    }

    /// The KEM registry
    pub fn kems(&self) -> &KemRegistry {
        &self.kems
    }

    /// The signature registry
    pub fn signatures(&self) -> &SignatureRegistry {
        &self.signatures
    }

    /// The shared provider
    pub fn provider(&self) -> &Arc<dyn Provider> {
        self.kems.provider()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_enabled_is_ordered_subset() {
        let mechanisms = Mechanisms::native();

        for (supported, enabled) in [
            (mechanisms.kems().supported().unwrap(), mechanisms.kems().enabled().unwrap()),
            (
                mechanisms.signatures().supported().unwrap(),
                mechanisms.signatures().enabled().unwrap(),
            ),
        ] {
            assert!(supported.len() >= enabled.len());
            let mut positions = enabled
                .iter()
                .map(|name| supported.iter().position(|s| s == name).unwrap());
            let mut last = None;
            for pos in &mut positions {
                assert!(last.is_none_or(|l| l < pos));
                last = Some(pos);
            }
        }
    }

    #[test]
    fn test_name_at_out_of_range() {
        let kems = Mechanisms::native().kems().supported().unwrap().len();
        let registry = KemRegistry::new(Arc::new(NativeProvider::new()));

        assert_eq!(registry.name_at(0).unwrap(), "Kyber512");
        assert_eq!(
            registry.name_at(kems),
            Err(Error::IndexOutOfRange { index: kems, count: kems })
        );
    }

    #[test]
    fn test_ensure_enabled_distinguishes_errors() {
        let registry = KemRegistry::new(Arc::new(NativeProvider::new()));

        assert_eq!(
            registry.ensure_enabled("unsupported_kem"),
            Err(Error::MechanismNotSupported("unsupported_kem".into()))
        );
        assert_eq!(
            registry.ensure_enabled("ML-KEM-512"),
            Err(Error::MechanismNotEnabled("ML-KEM-512".into()))
        );
    }

    #[test]
    fn test_debug_reports_population() {
        let registry = SignatureRegistry::new(Arc::new(NativeProvider::new()));
        assert!(format!("{:?}", registry).contains("populated: false"));

        registry.count().unwrap();
        assert!(format!("{:?}", registry).contains("populated: true"));
    }
}
