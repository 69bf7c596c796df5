/*!
CRYSTALS-Kyber backends.

Kyber512, Kyber768 and Kyber1024, each behind its own feature.
*/

#[allow(dead_code)]
const KYBER_VERSION: &str = "NIST Round 3";

kem_parameter_set!(
    Kyber512, kyber512, pqcrypto_kyber::kyber512,
    feature = "kyber512", name = "Kyber512",
    version = KYBER_VERSION, level = 1
);

kem_parameter_set!(
    Kyber768, kyber768, pqcrypto_kyber::kyber768,
    feature = "kyber768", name = "Kyber768",
    version = KYBER_VERSION, level = 3
);

kem_parameter_set!(
    Kyber1024, kyber1024, pqcrypto_kyber::kyber1024,
    feature = "kyber1024", name = "Kyber1024",
    version = KYBER_VERSION, level = 5
);
