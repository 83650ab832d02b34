//! Locale-aware person and address samplers.

use super::pt_br;
use rand::Rng;

fn pick<'a, R: Rng>(rng: &mut R, list: &'a [&'a str]) -> &'a str {
    list[rng.random_range(0..list.len())]
}

/// Full name: first name plus one surname.
pub fn full_name<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {}",
        pick(rng, pt_br::FIRST_NAMES),
        pick(rng, pt_br::SURNAMES)
    )
}

/// Surname only, for composite strings like hospital or school names.
pub fn surname<R: Rng>(rng: &mut R) -> String {
    pick(rng, pt_br::SURNAMES).to_string()
}

/// E-mail address. Not correlated with any sampled name; addresses only
/// need to look plausible, not to match a person.
pub fn email<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}.{}{}@{}",
        pick(rng, pt_br::SURNAMES).to_lowercase(),
        pick(rng, pt_br::SURNAMES).to_lowercase(),
        rng.random_range(1..100),
        pick(rng, pt_br::EMAIL_PROVIDERS)
    )
}

/// Mobile phone number: `(DD) 9NNNN-NNNN`.
pub fn phone<R: Rng>(rng: &mut R) -> String {
    format!(
        "({}) 9{:04}-{:04}",
        pick(rng, pt_br::AREA_CODES),
        rng.random_range(0..10_000),
        rng.random_range(0..10_000)
    )
}

/// Street address with house number.
pub fn street_address<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {}, {}",
        pick(rng, pt_br::STREET_TYPES),
        pick(rng, pt_br::SURNAMES),
        rng.random_range(1..2000)
    )
}

/// City name.
pub fn city<R: Rng>(rng: &mut R) -> String {
    pick(rng, pt_br::CITIES).to_string()
}

/// Two-letter federative unit code.
pub fn state_code<R: Rng>(rng: &mut R) -> String {
    pick(rng, pt_br::STATE_CODES).to_string()
}

/// Postal code: `NNNNN-NNN`.
pub fn postal_code<R: Rng>(rng: &mut R) -> String {
    format!(
        "{:05}-{:03}",
        rng.random_range(1_000..100_000),
        rng.random_range(0..1_000)
    )
}

/// Neighborhood name.
pub fn neighborhood<R: Rng>(rng: &mut R) -> String {
    pick(rng, pt_br::NEIGHBORHOODS).to_string()
}

/// Company name: surname plus sector.
pub fn company<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {}",
        pick(rng, pt_br::SURNAMES),
        pick(rng, pt_br::COMPANY_SECTORS)
    )
}

/// Country name, for the rare non-domestic transaction.
pub fn country<R: Rng>(rng: &mut R) -> String {
    pick(rng, pt_br::COUNTRIES).to_string()
}

/// One capitalized filler word.
pub fn word<R: Rng>(rng: &mut R) -> String {
    capitalize(pick(rng, pt_br::WORDS))
}

/// Short sentence of 4 to 8 filler words.
pub fn sentence<R: Rng>(rng: &mut R) -> String {
    let count = rng.random_range(4..=8);
    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
        words.push(pick(rng, pt_br::WORDS));
    }
    format!("{}.", capitalize(&words.join(" ")))
}

/// Free-text remark of one or two sentences.
pub fn free_text<R: Rng>(rng: &mut R) -> String {
    if rng.random_bool(0.5) {
        sentence(rng)
    } else {
        format!("{} {}", sentence(rng), sentence(rng))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
