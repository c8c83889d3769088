//! Spelling integers as words.
//!
//! Decomposition by magnitude band, recursing only on strictly smaller
//! values:
//!
//! ```text
//! 0..=9        ones
//! 10..=19      teens
//! 20..=99      unit + joiner + tens   (or tens + joiner + unit)
//! 100..=999    prefix(h) + hundred + rest
//! 1000..       prefix(t) + thousand + rest
//! >= ceiling   digit by digit
//! ```

use crate::NumeralWords;

/// Spell a (possibly `-`-prefixed) ASCII digit string as words.
///
/// Anything that is not a digit string is returned unchanged.
///
/// # Panics
///
/// If `words` has not been validated (word rows shorter than ten entries).
pub fn spell_number(token: &str, words: &NumeralWords) -> String {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return token.to_string();
    }

    let spelled = match digits.parse::<u64>() {
        Ok(n) if n < words.digit_spelling_threshold => spell(n, words),
        // Overflowing or above the ceiling.
        _ => spell_digits(digits, words),
    };

    if negative && !words.minus.is_empty() { format!("{} {}", words.minus, spelled) } else { spelled }
}

fn spell(n: u64, words: &NumeralWords) -> String {
    match n {
        0..=9 => words.ones[n as usize].clone(),
        10..=19 => words.teens[(n - 10) as usize].clone(),
        20..=99 => {
            let tens = &words.tens[(n / 10) as usize];
            let unit = n % 10;
            if unit == 0 {
                tens.clone()
            } else if words.unit_before_tens {
                format!("{}{}{}", prefix(unit, words), words.joiner, tens)
            } else {
                format!("{}{}{}", tens, words.joiner, words.ones[unit as usize])
            }
        }
        100..=999 => format!("{}{}{}", prefix(n / 100, words), words.hundred, rest(n % 100, words)),
        _ => format!("{}{}{}", prefix(n / 1000, words), words.thousand, rest(n % 1000, words)),
    }
}

/// Spelling of `n` when it leads a compound ("ein" rather than "eins").
fn prefix(n: u64, words: &NumeralWords) -> String {
    match (&words.one_combining, n) {
        (Some(one), 1) => one.clone(),
        _ => spell(n, words),
    }
}

fn rest(n: u64, words: &NumeralWords) -> String {
    if n > 0 { spell(n, words) } else { String::new() }
}

fn spell_digits(digits: &str, words: &NumeralWords) -> String {
    digits.bytes().map(|b| words.ones[(b - b'0') as usize].as_str()).collect::<Vec<_>>().join(" ")
}
