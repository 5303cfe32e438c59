//! ML-DSA (Dilithium) parameter sets, FIPS 204

sign_primitive!(
    /// ML-DSA-44 (Dilithium2)
    MLDSA44,
    "ML-DSA-44",
    pqcrypto_mldsa::mldsa44,
    2
);

sign_primitive!(
    /// ML-DSA-65 (Dilithium3)
    MLDSA65,
    "ML-DSA-65",
    pqcrypto_mldsa::mldsa65,
    3
);

sign_primitive!(
    /// ML-DSA-87 (Dilithium5)
    MLDSA87,
    "ML-DSA-87",
    pqcrypto_mldsa::mldsa87,
    5
);
