//! CPF identifier sampler.
//!
//! Generates syntactically valid CPF numbers (`XXX.XXX.XXX-XX`) with proper
//! mod-11 check digits. Uniqueness is probabilistic only; the table
//! generator closes the gap with bounded retries per table.

use rand::Rng;

/// Generate a CPF with valid check digits.
pub fn cpf<R: Rng>(rng: &mut R) -> String {
    let mut digits = [0u8; 11];
    for d in digits.iter_mut().take(9) {
        *d = rng.random_range(0..10);
    }
    digits[9] = check_digit(&digits[..9]);
    digits[10] = check_digit(&digits[..10]);

    format!(
        "{}{}{}.{}{}{}.{}{}{}-{}{}",
        digits[0],
        digits[1],
        digits[2],
        digits[3],
        digits[4],
        digits[5],
        digits[6],
        digits[7],
        digits[8],
        digits[9],
        digits[10]
    )
}

/// Mod-11 check digit over the given prefix. Weights run from `len + 1`
/// down to 2; a remainder of 10 maps to 0.
fn check_digit(prefix: &[u8]) -> u8 {
    let len = prefix.len() as u32;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * (len + 1 - i as u32))
        .sum();
    let rem = (sum * 10) % 11;
    if rem == 10 {
        0
    } else {
        rem as u8
    }
}
