/*!
SPHINCS+ backends (opt-in `sphincsplus` feature).

These need a large native stack; see [`crate::core::threading`].
*/

#[allow(dead_code)]
const SPHINCS_VERSION: &str = "NIST Round 3.1";

signature_parameter_set!(
    SphincsSha2128fSimple, sphincs_sha2_128f_simple, pqcrypto_sphincsplus::sphincssha2128fsimple,
    feature = "sphincsplus", name = "SPHINCS+-SHA2-128f-simple",
    version = SPHINCS_VERSION, level = 1
);

signature_parameter_set!(
    SphincsShake128fSimple, sphincs_shake_128f_simple, pqcrypto_sphincsplus::sphincsshake128fsimple,
    feature = "sphincsplus", name = "SPHINCS+-SHAKE-128f-simple",
    version = SPHINCS_VERSION, level = 1
);
