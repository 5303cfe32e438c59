//! Post-quantum signature parameter sets

macro_rules! sign_primitive {
    ($(#[$meta:meta])* $ident:ident, $name:literal, $krate:ident :: $module:ident, $level:literal) => {
        $(#[$meta])*
        pub static $ident: ::pqkm_api::Primitive = {
            fn keypair() -> ::pqkm_api::KeyPairBytes {
                use ::pqcrypto_traits::sign::{PublicKey as _, SecretKey as _};

                let (pk, sk) = $krate::$module::keypair();
                (
                    pk.as_bytes().to_vec(),
                    ::zeroize::Zeroizing::new(sk.as_bytes().to_vec()),
                )
            }

            ::pqkm_api::Primitive {
                name: $name,
                family: ::pqkm_api::Family::Signature,
                nist_level: $level,
                public_key_len: $krate::$module::public_key_bytes,
                secret_key_len: $krate::$module::secret_key_bytes,
                max_output_len: $krate::$module::signature_bytes,
                keypair,
            }
        };
    };
}

pub mod falcon;
pub mod mldsa;
pub mod sphincs;
