//! ML-KEM (Kyber) Key Encapsulation Mechanism
//!
//! FIPS 203 parameter sets backed by `pqcrypto-mlkem`. Key sizes are read
//! from the library rather than restated here, so the declared lengths can
//! never drift from what keygen actually produces.

use pqcrypto_traits::kem::{PublicKey as _, SecretKey as _};
use pqkm_api::{Family, KeyPairBytes, Primitive};
use zeroize::Zeroizing;

macro_rules! mlkem_primitive {
    ($(#[$meta:meta])* $ident:ident, $name:literal, $module:ident, $level:literal) => {
        $(#[$meta])*
        pub static $ident: Primitive = {
            fn keypair() -> KeyPairBytes {
                let (pk, sk) = pqcrypto_mlkem::$module::keypair();
                (
                    pk.as_bytes().to_vec(),
                    Zeroizing::new(sk.as_bytes().to_vec()),
                )
            }

            Primitive {
                name: $name,
                family: Family::Kem,
                nist_level: $level,
                public_key_len: pqcrypto_mlkem::$module::public_key_bytes,
                secret_key_len: pqcrypto_mlkem::$module::secret_key_bytes,
                max_output_len: pqcrypto_mlkem::$module::ciphertext_bytes,
                keypair,
            }
        };
    };
}

mlkem_primitive!(
    /// ML-KEM-512 (Kyber512), NIST category 1
    MLKEM512,
    "ML-KEM-512",
    mlkem512,
    1
);

mlkem_primitive!(
    /// ML-KEM-768 (Kyber768), NIST category 3
    MLKEM768,
    "ML-KEM-768",
    mlkem768,
    3
);

mlkem_primitive!(
    /// ML-KEM-1024 (Kyber1024), NIST category 5
    MLKEM1024,
    "ML-KEM-1024",
    mlkem1024,
    5
);
