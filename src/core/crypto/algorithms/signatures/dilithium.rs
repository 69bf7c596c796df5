/*!
CRYSTALS-Dilithium backends.

This module provides the Dilithium signature parameter sets, each behind
its own feature.
*/

#[allow(dead_code)]
const DILITHIUM_VERSION: &str = "NIST Round 3.1";

signature_parameter_set!(
    Dilithium2, dilithium2, pqcrypto_dilithium::dilithium2,
    feature = "dilithium2", name = "Dilithium2",
    version = DILITHIUM_VERSION, level = 2
);

signature_parameter_set!(
    Dilithium3, dilithium3, pqcrypto_dilithium::dilithium3,
    feature = "dilithium3", name = "Dilithium3",
    version = DILITHIUM_VERSION, level = 3
);

signature_parameter_set!(
    Dilithium5, dilithium5, pqcrypto_dilithium::dilithium5,
    feature = "dilithium5", name = "Dilithium5",
    version = DILITHIUM_VERSION, level = 5
);

#[cfg(all(test, feature = "dilithium3"))]
mod tests {
    use super::*;
    use crate::core::constants::sizes::dilithium;
    use crate::core::crypto::traits::SignatureInstance;

    #[test]
    fn test_dilithium3_details() {
        let sig = dilithium3().expect("dilithium3 is compiled in");
        let details = sig.details();

        assert_eq!(details.name, "Dilithium3");
        assert!(details.is_euf_cma);
        assert!(!details.supports_context_string);
        assert_eq!(details.length_public_key, dilithium::PUBLIC_KEY_BYTES_3);
        assert_eq!(details.max_length_signature, dilithium::SIGNATURE_BYTES_3);
    }

    #[test]
    fn test_dilithium3_sign_reports_length() {
        let sig = dilithium3().expect("dilithium3 is compiled in");
        let details = sig.details();
        let mut pk = vec![0u8; details.length_public_key];
        let mut sk = vec![0u8; details.length_secret_key];
        assert!(sig.keypair(&mut pk, &mut sk).is_success());

        let mut signature = vec![0u8; details.max_length_signature];
        let mut len = 0usize;
        assert!(sig.sign(&mut signature, &mut len, b"message", &sk).is_success());
        assert!(len > 0 && len <= details.max_length_signature);

        assert!(sig.verify(b"message", &signature[..len], &pk).is_success());
        assert!(!sig.verify(b"other message", &signature[..len], &pk).is_success());
    }

    #[test]
    fn test_context_variants_unsupported() {
        let sig = dilithium3().expect("dilithium3 is compiled in");
        let mut out = [0u8; 8];
        let mut len = 0usize;

        assert!(!sig.sign_with_context(&mut out, &mut len, b"m", b"ctx", &[]).is_success());
        assert!(!sig.verify_with_context(b"m", &out, b"ctx", &[]).is_success());
    }
}
