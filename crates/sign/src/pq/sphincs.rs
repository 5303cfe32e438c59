//! SPHINCS+ (SLH-DSA) parameter sets, SHA2 simple variants

sign_primitive!(
    /// SPHINCS+-SHA2-128f-simple
    SPHINCS_SHA2_128F,
    "SPHINCS+-SHA2-128f-simple",
    pqcrypto_sphincsplus::sphincssha2128fsimple,
    1
);

sign_primitive!(
    /// SPHINCS+-SHA2-128s-simple
    SPHINCS_SHA2_128S,
    "SPHINCS+-SHA2-128s-simple",
    pqcrypto_sphincsplus::sphincssha2128ssimple,
    1
);

sign_primitive!(
    /// SPHINCS+-SHA2-192f-simple
    SPHINCS_SHA2_192F,
    "SPHINCS+-SHA2-192f-simple",
    pqcrypto_sphincsplus::sphincssha2192fsimple,
    3
);

sign_primitive!(
    /// SPHINCS+-SHA2-192s-simple
    SPHINCS_SHA2_192S,
    "SPHINCS+-SHA2-192s-simple",
    pqcrypto_sphincsplus::sphincssha2192ssimple,
    3
);

sign_primitive!(
    /// SPHINCS+-SHA2-256f-simple
    SPHINCS_SHA2_256F,
    "SPHINCS+-SHA2-256f-simple",
    pqcrypto_sphincsplus::sphincssha2256fsimple,
    5
);

sign_primitive!(
    /// SPHINCS+-SHA2-256s-simple
    SPHINCS_SHA2_256S,
    "SPHINCS+-SHA2-256s-simple",
    pqcrypto_sphincsplus::sphincssha2256ssimple,
    5
);
