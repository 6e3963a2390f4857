//! Stable suggestion ids.
//!
//! Ids are `"{prefix}_{hash:08x}"` where `hash` is 32-bit FNV-1a over
//! `"{prefix}:{key}"`. Same key, same id, on every run and every platform.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the UTF-8 bytes of `input`.
pub fn fnv1a32(input: &str) -> u32 {
    input.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

pub fn stable_id(prefix: &str, key: &str) -> String {
    let hash = fnv1a32(&format!("{prefix}:{key}"));
    format!("{prefix}_{hash:08x}")
}
