//! Object Identifiers
//!
//! 24 lowercase hex digits: seconds since epoch (8), per-process random (10),
//! counter (6).

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use uuid::Uuid;

struct Seed {
    process_unique: u64,
    counter: AtomicU32,
}

static SEED: OnceLock<Seed> = OnceLock::new();

fn seed() -> &'static Seed {
    SEED.get_or_init(|| {
        let bytes = *Uuid::new_v4().as_bytes();
        // 40 random bits for the process part, 24 more for the counter start
        let process_unique = bytes[..5].iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b));
        let start = bytes[8..11].iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b));
        Seed {
            process_unique,
            counter: AtomicU32::new(start),
        }
    })
}

fn next_count() -> u32 {
    seed().counter.fetch_add(1, Ordering::Relaxed) & 0xff_ffff
}

/// Generate a new id
pub fn new_object_id() -> String {
    let seconds = chrono::Utc::now().timestamp() as u32;
    format!("{:08x}{:010x}{:06x}", seconds, seed().process_unique, next_count())
}

/// Exactly 24 ASCII hex digits
pub fn is_object_id(s: &str) -> bool {
    s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit())
}
