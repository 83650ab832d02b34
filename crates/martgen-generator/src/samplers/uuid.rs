//! UUID sampler.

use martgen_core::CellValue;
use rand::Rng;
use uuid::Uuid;

/// Generate a random UUID v4 from the provided RNG.
///
/// Drawing the bytes from the caller's RNG (instead of `Uuid::new_v4`)
/// keeps seeded runs fully reproducible.
pub fn sample_uuid<R: Rng>(rng: &mut R) -> CellValue {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    CellValue::Uuid(Uuid::from_bytes(bytes))
}
