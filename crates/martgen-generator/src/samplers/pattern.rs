//! Composite string sampler.
//!
//! Expands placeholders inside a pattern string:
//! - `{rand:N}` - random N-digit number, no leading zero
//! - `{pick:A|B|C}` - one of the listed options
//! - `{word}` - capitalized filler word
//! - `{surname}` - surname
//! - `{company}` - company name
//! - `{state}` - two-letter state code
//! - `{sentence}` - short filler sentence

use super::person;
use rand::Rng;

/// Expand a pattern into a concrete string.
///
/// Unknown placeholders are kept verbatim so a typo in a schema shows up in
/// the output instead of silently vanishing.
pub fn sample_pattern<R: Rng>(rng: &mut R, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let Some(len) = rest[start..].find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        expand_token(rng, &rest[start + 1..start + len], &mut out);
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    out
}

fn expand_token<R: Rng>(rng: &mut R, token: &str, out: &mut String) {
    if let Some(digits) = token.strip_prefix("rand:") {
        match digits.parse::<usize>() {
            Ok(n) => out.push_str(&random_digits(rng, n)),
            Err(_) => keep_verbatim(token, out),
        }
        return;
    }
    if let Some(options) = token.strip_prefix("pick:") {
        let options: Vec<&str> = options.split('|').collect();
        out.push_str(options[rng.random_range(0..options.len())]);
        return;
    }
    match token {
        "word" => out.push_str(&person::word(rng)),
        "surname" => out.push_str(&person::surname(rng)),
        "company" => out.push_str(&person::company(rng)),
        "state" => out.push_str(&person::state_code(rng)),
        "sentence" => out.push_str(&person::sentence(rng)),
        _ => keep_verbatim(token, out),
    }
}

fn keep_verbatim(token: &str, out: &mut String) {
    out.push('{');
    out.push_str(token);
    out.push('}');
}

/// Random number with exactly `digits` digits. The first digit is 1-9 so
/// the width is stable.
fn random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }
    let mut result = String::with_capacity(digits);
    result.push(char::from_digit(rng.random_range(1..10), 10).unwrap_or('1'));
    for _ in 1..digits {
        result.push(char::from_digit(rng.random_range(0..10), 10).unwrap_or('0'));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rand_placeholder() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = sample_pattern(&mut rng, "SKU-{rand:6}");
        assert!(value.starts_with("SKU-"));
        assert_eq!(value.len(), 4 + 6);
        assert!(value[4..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_pick_placeholder() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let value = sample_pattern(&mut rng, "CD {pick:Norte|Sul|Leste|Oeste|Central}");
            let region = value.strip_prefix("CD ").unwrap();
            assert!(["Norte", "Sul", "Leste", "Oeste", "Central"].contains(&region));
        }
    }

    #[test]
    fn test_registration_pattern() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = sample_pattern(&mut rng, "{rand:5}-{state}");
        // "12345-SP"
        assert_eq!(value.len(), 8);
        assert_eq!(value.chars().nth(5), Some('-'));
    }

    #[test]
    fn test_multiple_placeholders() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = sample_pattern(&mut rng, "Campanha {word} {pick:Q1|Q2|Q3|Q4}");
        assert!(value.starts_with("Campanha "));
        let quarter = value.rsplit(' ').next().unwrap();
        assert!(["Q1", "Q2", "Q3", "Q4"].contains(&quarter));
    }

    #[test]
    fn test_unknown_placeholder_kept_verbatim() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(sample_pattern(&mut rng, "x {nope} y"), "x {nope} y");
    }

    #[test]
    fn test_literal_text_untouched() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(sample_pattern(&mut rng, "sem placeholder"), "sem placeholder");
    }
}
