//! # Entropy Accounting
//!
//! A passphrase of `n` words drawn uniformly from a list of `w` words has
//! `w^n` equally likely outcomes, so `n * log2(w)` bits of entropy. staple
//! reports the floor of that figure, never a rounded-up one.
//!
//! To make the number tangible, [`equivalent_password`] builds a random
//! password of comparable strength in a plain character alphabet: the longest
//! length `L` such that `alphabet^L <= w^n`. Those examples are feedback for
//! the user; they play no part in generating the passphrase itself.
//!
//! Both figures are floored logarithms of the outcome count. Counts below
//! 2^128 are settled exactly in integers, so exact powers are neither cut
//! short nor rounded up. Larger counts, such as 64 words from a big list, use
//! [`Possibilities::log2`] alone.

use crate::error::Result;
use crate::random::{RandomSource, UniformSampler};
use serde::Serialize;
use std::fmt;

/// `base ^ exponent` equally likely outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Possibilities {
    pub base: usize,
    pub exponent: usize,
}

impl Possibilities {
    pub fn new(base: usize, exponent: usize) -> Self {
        Self { base, exponent }
    }

    pub fn log2(&self) -> f64 {
        if self.base <= 1 || self.exponent == 0 {
            return 0.0;
        }
        self.exponent as f64 * (self.base as f64).log2()
    }

    /// The outcome count as an integer, if it fits in a `u128`.
    fn exact(&self) -> Option<u128> {
        let exponent = u32::try_from(self.exponent).ok()?;
        u128::try_from(self.base).ok()?.checked_pow(exponent)
    }

    /// Largest `k` with `radix^k <= base^exponent`.
    ///
    /// Past 2^128 this trusts the float estimate, which is off by around
    /// 1e-13 and so only errs for counts that close below an exact power.
    fn floor_log(&self, radix: u64) -> usize {
        if self.log2() == 0.0 || radix < 2 {
            return 0;
        }
        let estimate = (self.log2() / (radix as f64).log2()).floor() as usize;
        let Some(count) = self.exact() else {
            return estimate;
        };

        let radix = u128::from(radix);
        let within = |k: usize| {
            u32::try_from(k)
                .ok()
                .and_then(|k| radix.checked_pow(k))
                .is_some_and(|power| power <= count)
        };

        let mut k = estimate;
        while k > 0 && !within(k) {
            k -= 1;
        }
        while within(k + 1) {
            k += 1;
        }
        k
    }
}

/// `floor(num_words * log2(wordlist_size))`.
pub fn entropy_bits(wordlist_size: usize, num_words: usize) -> u32 {
    let bits = Possibilities::new(wordlist_size, num_words).floor_log(2);
    u32::try_from(bits).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alphabet {
    /// `a` to `z`.
    Lowercase,
    /// Digits, uppercase and lowercase letters.
    Alphanumeric,
    /// Every visible ASCII character, `!` (33) to `~` (126).
    PrintableAscii,
}

impl Alphabet {
    pub const ALL: [Alphabet; 3] = [
        Alphabet::Lowercase,
        Alphabet::Alphanumeric,
        Alphabet::PrintableAscii,
    ];

    pub fn size(&self) -> usize {
        match self {
            Alphabet::Lowercase => 26,
            Alphabet::Alphanumeric => 62,
            Alphabet::PrintableAscii => 94,
        }
    }

    /// Half-open range of code points sampled from.
    fn code_range(&self) -> (i64, i64) {
        match self {
            Alphabet::Lowercase => (b'a' as i64, b'z' as i64 + 1),
            Alphabet::Alphanumeric => (b'0' as i64, b'z' as i64 + 1),
            Alphabet::PrintableAscii => (33, 127),
        }
    }

    /// Whether a code inside [`Self::code_range`] falls in a punctuation gap.
    fn excludes(&self, code: i64) -> bool {
        match self {
            // ':' to '@' between the digits and 'A', '[' to '`' before 'a'.
            Alphabet::Alphanumeric => (58..=64).contains(&code) || (91..=96).contains(&code),
            _ => false,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        let code = c as i64;
        let (lower, upper) = self.code_range();
        code >= lower && code < upper && !self.excludes(code)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Alphabet::Lowercase => "lowercase",
            Alphabet::Alphanumeric => "alphanumeric",
            Alphabet::PrintableAscii => "printable ASCII",
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquivalentPassword {
    pub alphabet: Alphabet,
    pub text: String,
    pub length: usize,
}

/// Length of a random password over `alphabet` that is no stronger than
/// `possibilities`.
pub fn equivalent_length(possibilities: Possibilities, alphabet: Alphabet) -> usize {
    possibilities.floor_log(alphabet.size() as u64)
}

/// A random example password over `alphabet` of equivalent strength.
pub fn equivalent_password<R: RandomSource>(
    possibilities: Possibilities,
    alphabet: Alphabet,
    sampler: &mut UniformSampler<R>,
) -> Result<EquivalentPassword> {
    let length = equivalent_length(possibilities, alphabet);
    let (lower, upper) = alphabet.code_range();
    let mut text = String::with_capacity(length);

    while text.len() < length {
        let code = sampler.next_int(lower, upper)?;
        if alphabet.excludes(code) {
            continue;
        }
        // Every code range lies inside ASCII.
        text.push(code as u8 as char);
    }

    Ok(EquivalentPassword {
        alphabet,
        text,
        length,
    })
}

/// Everything a client shows about the strength of a passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub entropy_bits: u32,
    pub wordlist_size: usize,
    pub word_count: usize,
    pub equivalents: Vec<EquivalentPassword>,
}

pub fn strength_report<R: RandomSource>(
    wordlist_size: usize,
    word_count: usize,
    sampler: &mut UniformSampler<R>,
) -> Result<StrengthReport> {
    let possibilities = Possibilities::new(wordlist_size, word_count);
    let equivalents = Alphabet::ALL
        .iter()
        .map(|alphabet| equivalent_password(possibilities, *alphabet, sampler))
        .collect::<Result<Vec<_>>>()?;

    Ok(StrengthReport {
        entropy_bits: entropy_bits(wordlist_size, word_count),
        wordlist_size,
        word_count,
        equivalents,
    })
}
