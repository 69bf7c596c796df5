/*!
KEM backends.
*/

/// Generate a KEM instance type for one pqcrypto parameter set plus a
/// constructor that yields `None` when the feature is off.
macro_rules! kem_parameter_set {
    (
        $ty:ident, $ctor:ident, $krate:ident :: $module:ident,
        feature = $feature:literal, name = $name:literal,
        version = $version:expr, level = $level:expr
    ) => {
        #[cfg(feature = $feature)]
        struct $ty;

        #[cfg(feature = $feature)]
        impl $crate::core::crypto::traits::KemInstance for $ty {
            fn details(&self) -> $crate::core::crypto::types::KemDetails {
                $crate::core::crypto::types::KemDetails {
                    name: $name.to_string(),
                    version: $version.to_string(),
                    claimed_nist_level: $level,
                    is_ind_cca: true,
                    length_public_key: $krate::$module::public_key_bytes(),
                    length_secret_key: $krate::$module::secret_key_bytes(),
                    length_ciphertext: $krate::$module::ciphertext_bytes(),
                    length_shared_secret: $krate::$module::shared_secret_bytes(),
                }
            }

            fn keypair(
                &self,
                public_key: &mut [u8],
                secret_key: &mut [u8],
            ) -> $crate::core::crypto::traits::Status {
                use pqcrypto_traits::kem::{PublicKey as _, SecretKey as _};
                use $crate::core::crypto::algorithms::copy_exact;

                let (pk, sk) = $krate::$module::keypair();
                (copy_exact(public_key, pk.as_bytes()) && copy_exact(secret_key, sk.as_bytes())).into()
            }

            fn encapsulate(
                &self,
                ciphertext: &mut [u8],
                shared_secret: &mut [u8],
                public_key: &[u8],
            ) -> $crate::core::crypto::traits::Status {
                use pqcrypto_traits::kem::{Ciphertext as _, PublicKey as _, SharedSecret as _};
                use $crate::core::crypto::algorithms::copy_exact;
                use $crate::core::crypto::traits::Status;

                let Ok(pk) = $krate::$module::PublicKey::from_bytes(public_key) else {
                    return Status::Error;
                };
                let (ss, ct) = $krate::$module::encapsulate(&pk);
                (copy_exact(ciphertext, ct.as_bytes()) && copy_exact(shared_secret, ss.as_bytes())).into()
            }

            fn decapsulate(
                &self,
                shared_secret: &mut [u8],
                ciphertext: &[u8],
                secret_key: &[u8],
            ) -> $crate::core::crypto::traits::Status {
                use pqcrypto_traits::kem::{Ciphertext as _, SecretKey as _, SharedSecret as _};
                use $crate::core::crypto::algorithms::copy_exact;
                use $crate::core::crypto::traits::Status;

                let Ok(ct) = $krate::$module::Ciphertext::from_bytes(ciphertext) else {
                    return Status::Error;
                };
                let Ok(sk) = $krate::$module::SecretKey::from_bytes(secret_key) else {
                    return Status::Error;
                };
                let ss = $krate::$module::decapsulate(&ct, &sk);
                copy_exact(shared_secret, ss.as_bytes()).into()
            }
        }

        pub(crate) fn $ctor() -> Option<Box<dyn $crate::core::crypto::traits::KemInstance>> {
            #[cfg(feature = $feature)]
            return Some(Box::new($ty));
            #[cfg(not(feature = $feature))]
            return None;
        }
    };
}

pub mod kyber;
