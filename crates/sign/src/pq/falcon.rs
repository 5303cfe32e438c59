//! Falcon parameter sets

sign_primitive!(
    /// Falcon-512, NIST category 1
    FALCON512,
    "Falcon-512",
    pqcrypto_falcon::falcon512,
    1
);

sign_primitive!(
    /// Falcon-1024, NIST category 5
    FALCON1024,
    "Falcon-1024",
    pqcrypto_falcon::falcon1024,
    5
);
