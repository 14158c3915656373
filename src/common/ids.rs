//! Deterministic dataset identifiers.

const FNV_OFFSET: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Fingerprint a byte payload as a `ds-xxxxxxxx` dataset identifier using
/// 32-bit FNV-1a.
pub fn dataset_fingerprint(bytes: &[u8]) -> String {
    let hash = bytes
        .iter()
        .fold(FNV_OFFSET, |h, b| (h ^ u32::from(*b)).wrapping_mul(FNV_PRIME));
    format!("ds-{hash:08x}")
}
