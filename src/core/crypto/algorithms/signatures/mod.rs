/*!
Signature backends.
*/

/// Generate a signature instance type for one pqcrypto parameter set plus a
/// constructor that yields `None` when the feature is off.
macro_rules! signature_parameter_set {
    (
        $ty:ident, $ctor:ident, $krate:ident :: $module:ident,
        feature = $feature:literal, name = $name:literal,
        version = $version:expr, level = $level:expr
    ) => {
        #[cfg(feature = $feature)]
        struct $ty;

        #[cfg(feature = $feature)]
        impl $crate::core::crypto::traits::SignatureInstance for $ty {
            fn details(&self) -> $crate::core::crypto::types::SignatureDetails {
                $crate::core::crypto::types::SignatureDetails {
                    name: $name.to_string(),
                    version: $version.to_string(),
                    claimed_nist_level: $level,
                    is_euf_cma: true,
                    supports_context_string: false,
                    length_public_key: $krate::$module::public_key_bytes(),
                    length_secret_key: $krate::$module::secret_key_bytes(),
                    max_length_signature: $krate::$module::signature_bytes(),
                }
            }

            fn keypair(
                &self,
                public_key: &mut [u8],
                secret_key: &mut [u8],
            ) -> $crate::core::crypto::traits::Status {
                use pqcrypto_traits::sign::{PublicKey as _, SecretKey as _};
                use $crate::core::crypto::algorithms::copy_exact;

                let (pk, sk) = $krate::$module::keypair();
                (copy_exact(public_key, pk.as_bytes()) && copy_exact(secret_key, sk.as_bytes())).into()
            }

            fn sign(
                &self,
                signature: &mut [u8],
                signature_len: &mut usize,
                message: &[u8],
                secret_key: &[u8],
            ) -> $crate::core::crypto::traits::Status {
                use pqcrypto_traits::sign::{DetachedSignature as _, SecretKey as _};
                use $crate::core::crypto::traits::Status;

                let Ok(sk) = $krate::$module::SecretKey::from_bytes(secret_key) else {
                    return Status::Error;
                };
                let detached = $krate::$module::detached_sign(message, &sk);
                let bytes = detached.as_bytes();
                if bytes.len() > signature.len() {
                    return Status::Error;
                }
                signature[..bytes.len()].copy_from_slice(bytes);
                *signature_len = bytes.len();
                Status::Success
            }

            fn verify(
                &self,
                message: &[u8],
                signature: &[u8],
                public_key: &[u8],
            ) -> $crate::core::crypto::traits::Status {
                use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _};
                use $crate::core::crypto::traits::Status;

                let Ok(pk) = $krate::$module::PublicKey::from_bytes(public_key) else {
                    return Status::Error;
                };
                let Ok(sig) = $krate::$module::DetachedSignature::from_bytes(signature) else {
                    return Status::Error;
                };
                $krate::$module::verify_detached_signature(&sig, message, &pk)
                    .is_ok()
                    .into()
            }
        }

        pub(crate) fn $ctor() -> Option<Box<dyn $crate::core::crypto::traits::SignatureInstance>> {
            #[cfg(feature = $feature)]
            return Some(Box::new($ty));
            #[cfg(not(feature = $feature))]
            return None;
        }
    };
}

pub mod dilithium;
pub mod sphincs;
