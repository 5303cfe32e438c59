//! Private-key bytes never reach the allocator un-erased
//!
//! This binary installs a global allocator that, while armed, scans every
//! block handed back for a long run of a sentinel byte. A key is loaded with
//! a private key made only of that byte and then destroyed, or has that key
//! replaced; no released block may still contain the pattern.
//!
//! Only one test lives here so that nothing else allocates while armed.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use pqkm::api::params::{PARAM_ENCODED_PUBLIC_KEY, PARAM_PRIV_KEY};
use pqkm::prelude::*;
use zeroize::Zeroizing;

const SENTINEL: u8 = 0xA5;
const RUN: usize = 64;

static ARMED: AtomicBool = AtomicBool::new(false);
static FOUND: AtomicUsize = AtomicUsize::new(0);

struct SentinelScanner;

unsafe fn holds_sentinel_run(ptr: *const u8, len: usize) -> bool {
    let mut run = 0;
    for i in 0..len {
        if core::ptr::read_volatile(ptr.add(i)) == SENTINEL {
            run += 1;
            if run >= RUN {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

unsafe impl GlobalAlloc for SentinelScanner {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        if ARMED.load(Ordering::SeqCst) && holds_sentinel_run(ptr, layout.size()) {
            FOUND.fetch_add(1, Ordering::SeqCst);
        }
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static ALLOCATOR: SentinelScanner = SentinelScanner;

fn armed<T>(f: impl FnOnce() -> T) -> (T, usize) {
    FOUND.store(0, Ordering::SeqCst);
    ARMED.store(true, Ordering::SeqCst);
    let out = f();
    ARMED.store(false, Ordering::SeqCst);
    (out, FOUND.load(Ordering::SeqCst))
}

/// Import `secret` as the private key of a fresh key
fn loaded(kmgmt: &KeyManagement, secret: &[u8]) -> Result<Key> {
    let mut key = kmgmt.new_key()?;
    let params: ParamSet = vec![Param::octets(PARAM_PRIV_KEY, secret)].into();
    kmgmt.import(Some(&mut key), Selection::PRIVATE_KEY, &params)?;
    Ok(key)
}

/// Composite hybrid private key whose classical and post-quantum halves are
/// all sentinel bytes
fn hybrid_secret(classical_len: usize, total_len: usize) -> Zeroizing<Vec<u8>> {
    let prefix = u32::try_from(classical_len).unwrap().to_be_bytes();
    let mut bytes = Zeroizing::new(vec![SENTINEL; total_len]);
    bytes[..4].copy_from_slice(&prefix);
    bytes
}

#[test]
fn test_private_key_erased_on_every_release_path() {
    // The scanner must notice a plain buffer released with the pattern.
    let ((), found) = armed(|| drop(std::hint::black_box(vec![SENTINEL; 256])));
    assert_eq!(found, 1);

    let kmgmt = KeyManagement::fetch(&ProviderContext::new(), "kyber768").unwrap();
    let secret = Zeroizing::new(vec![SENTINEL; kmgmt.info().private_key_len()]);

    // Destroy
    let (result, found) = armed(|| {
        let key = loaded(&kmgmt, &secret)?;
        let held = kmgmt.has(Some(&key), Selection::PRIVATE_KEY);
        kmgmt.free(Some(key));
        Ok::<_, Error>(held)
    });
    assert_eq!(result, Ok(true));
    assert_eq!(found, 0, "destroy released private-key bytes");

    // Replacement by an encoded public key
    let public = vec![0x11; kmgmt.info().public_key_len()];
    let (result, found) = armed(|| {
        let mut key = loaded(&kmgmt, &secret)?;
        let params: ParamSet = vec![Param::octets(PARAM_ENCODED_PUBLIC_KEY, &public)].into();
        kmgmt.set_params(Some(&mut key), &params)?;
        Ok::<_, Error>(key)
    });
    let key = result.unwrap();
    assert!(!key.has(Selection::PRIVATE_KEY));
    assert_eq!(found, 0, "encoded-pub-key released private-key bytes");
    kmgmt.free(Some(key));

    // Import over an existing private key
    let other = vec![0x22; kmgmt.info().private_key_len()];
    let (result, found) = armed(|| {
        let mut key = loaded(&kmgmt, &secret)?;
        let params: ParamSet = vec![Param::octets(PARAM_PRIV_KEY, &other)].into();
        kmgmt.import(Some(&mut key), Selection::PRIVATE_KEY, &params)?;
        Ok::<_, Error>(key)
    });
    let key = result.unwrap();
    assert_eq!(key.private_key(), Some(&other[..]));
    assert_eq!(found, 0, "re-import released private-key bytes");
    kmgmt.free(Some(key));

    // Generation over an existing private key
    let (result, found) = armed(|| {
        let mut key = loaded(&kmgmt, &secret)?;
        key.generate()?;
        Ok::<_, Error>(key)
    });
    let key = result.unwrap();
    assert_ne!(key.private_key(), Some(&secret[..]));
    assert_eq!(found, 0, "generate released private-key bytes");
    kmgmt.free(Some(key));

    // Hybrid destroy: classical scalar and composite private key
    let hybrid = KeyManagement::fetch(&ProviderContext::new(), "x25519_kyber768").unwrap();
    let secret = hybrid_secret(32, hybrid.info().private_key_len());
    let (result, found) = armed(|| {
        let key = loaded(&hybrid, &secret)?;
        let classical = key.classical().map(|c| c.has_secret());
        hybrid.free(Some(key));
        Ok::<_, Error>(classical)
    });
    assert_eq!(result, Ok(Some(true)));
    assert_eq!(found, 0, "hybrid destroy released private-key bytes");
}
