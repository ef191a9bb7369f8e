use crate::error::{Result, StapleError};
use crate::wordlist::BUILTIN_ID;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MIN_WORDS: usize = 3;
pub const DEFAULT_NUMBER_POOL: usize = 10;
pub const DEFAULT_SEPARATOR: &str = "-";

/// Largest accepted word count. 64 words from even a tiny list is far past
/// any useful strength.
pub const MAX_WORDS: usize = 64;
/// Largest accepted number pool; one sampler draw covers at most 2^32 values.
pub const MAX_NUMBER_POOL: usize = u32::MAX as usize;

/// Keys accepted by [`GenerationConfig::get`] and [`GenerationConfig::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "words",
    "first-upper",
    "separator",
    "join-mode",
    "append-numbers",
    "number-pool",
    "wordlist",
];

/// How the gaps between tokens are filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinMode {
    /// Every gap gets the separator string verbatim.
    Fixed,
    /// Every gap gets one character sampled from the separator string.
    #[default]
    Random,
}

impl fmt::Display for JoinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinMode::Fixed => write!(f, "fixed"),
            JoinMode::Random => write!(f, "random"),
        }
    }
}

impl FromStr for JoinMode {
    type Err = StapleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(JoinMode::Fixed),
            "random" => Ok(JoinMode::Random),
            other => Err(StapleError::InvalidConfig(format!(
                "join mode must be 'fixed' or 'random', got '{}'",
                other
            ))),
        }
    }
}

/// Options for one passphrase generation.
///
/// Numeric and boolean fields deserialize leniently: a value that is missing,
/// malformed or out of range falls back to the default instead of failing, so a
/// hand-edited or stale config file never blocks generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationConfig {
    #[serde(default = "default_min_words", deserialize_with = "lenient_min_words")]
    pub min_words: usize,

    #[serde(default = "default_true", deserialize_with = "lenient_first_upper")]
    pub first_upper: bool,

    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default)]
    pub join_mode: JoinMode,

    #[serde(default = "default_true", deserialize_with = "lenient_append_numbers")]
    pub append_numbers: bool,

    #[serde(
        default = "default_number_pool",
        deserialize_with = "lenient_number_pool"
    )]
    pub number_pool_size: usize,

    #[serde(default = "default_wordlist")]
    pub wordlist: String,
}

fn default_min_words() -> usize {
    DEFAULT_MIN_WORDS
}

fn default_number_pool() -> usize {
    DEFAULT_NUMBER_POOL
}

fn default_true() -> bool {
    true
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_wordlist() -> String {
    BUILTIN_ID.to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            first_upper: true,
            separator: default_separator(),
            join_mode: JoinMode::default(),
            append_numbers: true,
            number_pool_size: DEFAULT_NUMBER_POOL,
            wordlist: default_wordlist(),
        }
    }
}

/// Parses a count in `1..=max` the way a form field would: `"4"`, `4` and
/// `4.0` are all 4; anything out of range or unparseable is `None`.
pub fn coerce_count(value: &Value, max: usize) -> Option<usize> {
    let n = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 1.0 && *f <= max as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    usize::try_from(n).ok().filter(|n| (1..=max).contains(n))
}

pub fn coerce_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_u64().map(|n| n != 0),
        _ => None,
    }
}

fn lenient_min_words<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<usize, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(coerce_count(&value, MAX_WORDS).unwrap_or(DEFAULT_MIN_WORDS))
}

fn lenient_number_pool<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<usize, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(coerce_count(&value, MAX_NUMBER_POOL).unwrap_or(DEFAULT_NUMBER_POOL))
}

fn lenient_first_upper<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<bool, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(coerce_flag(&value).unwrap_or(true))
}

fn lenient_append_numbers<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<bool, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(coerce_flag(&value).unwrap_or(true))
}

impl GenerationConfig {
    /// Checks the invariants generation relies on.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_WORDS).contains(&self.min_words) {
            return Err(StapleError::InvalidConfig(format!(
                "word count must be between 1 and {}",
                MAX_WORDS
            )));
        }
        if self.append_numbers && !(1..=MAX_NUMBER_POOL).contains(&self.number_pool_size) {
            return Err(StapleError::InvalidConfig(format!(
                "number pool size must be between 1 and {}",
                MAX_NUMBER_POOL
            )));
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "words" => Some(self.min_words.to_string()),
            "first-upper" => Some(self.first_upper.to_string()),
            "separator" => Some(self.separator.clone()),
            "join-mode" => Some(self.join_mode.to_string()),
            "append-numbers" => Some(self.append_numbers.to_string()),
            "number-pool" => Some(self.number_pool_size.to_string()),
            "wordlist" => Some(self.wordlist.clone()),
            _ => None,
        }
    }

    /// Sets a key from user input.
    ///
    /// Malformed numbers and flags take the default value rather than failing.
    /// Unknown keys and join modes are errors.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let raw = Value::String(value.to_string());
        match key {
            "words" => self.min_words = coerce_count(&raw, MAX_WORDS).unwrap_or(DEFAULT_MIN_WORDS),
            "first-upper" => self.first_upper = coerce_flag(&raw).unwrap_or(true),
            "separator" => self.separator = value.to_string(),
            "join-mode" => self.join_mode = value.parse().map_err(|e| format!("{}", e))?,
            "append-numbers" => self.append_numbers = coerce_flag(&raw).unwrap_or(true),
            "number-pool" => {
                self.number_pool_size =
                    coerce_count(&raw, MAX_NUMBER_POOL).unwrap_or(DEFAULT_NUMBER_POOL)
            }
            "wordlist" => {
                if value.trim().is_empty() {
                    return Err("wordlist identifier cannot be empty".to_string());
                }
                self.wordlist = value.trim().to_string();
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.min_words, 3);
        assert!(config.first_upper);
        assert!(config.append_numbers);
        assert_eq!(config.separator, "-");
        assert_eq!(config.number_pool_size, 10);
        assert_eq!(config.wordlist, "en");
        assert_eq!(config.join_mode, JoinMode::Random);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: GenerationConfig = serde_json::from_str(r#"{"separator": "_"}"#).unwrap();
        assert_eq!(config.separator, "_");
        assert_eq!(config.min_words, 3);
        assert_eq!(config.number_pool_size, 10);
    }

    #[test]
    fn test_malformed_numbers_coerce_to_defaults() {
        let config: GenerationConfig = serde_json::from_value(json!({
            "min_words": "abc",
            "number_pool_size": 0,
            "first_upper": "maybe",
        }))
        .unwrap();
        assert_eq!(config.min_words, DEFAULT_MIN_WORDS);
        assert_eq!(config.number_pool_size, DEFAULT_NUMBER_POOL);
        assert!(config.first_upper);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let config: GenerationConfig = serde_json::from_value(json!({
            "min_words": "5",
            "number_pool_size": 100,
            "append_numbers": "false",
        }))
        .unwrap();
        assert_eq!(config.min_words, 5);
        assert_eq!(config.number_pool_size, 100);
        assert!(!config.append_numbers);
    }

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count(&json!(4), MAX_WORDS), Some(4));
        assert_eq!(coerce_count(&json!("4"), MAX_WORDS), Some(4));
        assert_eq!(coerce_count(&json!(" 7 "), MAX_WORDS), Some(7));
        assert_eq!(coerce_count(&json!(4.0), MAX_WORDS), Some(4));
        assert_eq!(coerce_count(&json!(0), MAX_WORDS), None);
        assert_eq!(coerce_count(&json!(-2), MAX_WORDS), None);
        assert_eq!(coerce_count(&json!("four"), MAX_WORDS), None);
        assert_eq!(coerce_count(&json!(null), MAX_WORDS), None);
    }

    #[test]
    fn test_coerce_count_rejects_values_above_max() {
        assert_eq!(coerce_count(&json!(64), MAX_WORDS), Some(64));
        assert_eq!(coerce_count(&json!(65), MAX_WORDS), None);
        assert_eq!(coerce_count(&json!(1e30), MAX_WORDS), None);
        assert_eq!(coerce_count(&json!(u64::MAX), MAX_WORDS), None);
        assert_eq!(coerce_count(&json!("18446744073709551615"), MAX_WORDS), None);
        assert_eq!(coerce_count(&json!("99999999999999999999999"), MAX_WORDS), None);
        assert_eq!(coerce_count(&json!(1e30), MAX_NUMBER_POOL), None);
        assert_eq!(coerce_count(&json!(4294967296u64), MAX_NUMBER_POOL), None);
    }

    #[test]
    fn test_huge_stored_numbers_coerce_to_defaults() {
        let config: GenerationConfig = serde_json::from_value(json!({
            "min_words": 1e30,
            "number_pool_size": 4294967296u64,
        }))
        .unwrap();
        assert_eq!(config.min_words, DEFAULT_MIN_WORDS);
        assert_eq!(config.number_pool_size, DEFAULT_NUMBER_POOL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_set_huge_number_uses_default() {
        let mut config = GenerationConfig::default();
        config.set("words", "18446744073709551615").unwrap();
        config.set("number-pool", "100000000000").unwrap();
        assert_eq!(config.min_words, DEFAULT_MIN_WORDS);
        assert_eq!(config.number_pool_size, DEFAULT_NUMBER_POOL);
    }

    #[test]
    fn test_validate_rejects_values_above_limits() {
        let too_many = GenerationConfig {
            min_words: MAX_WORDS + 1,
            ..GenerationConfig::default()
        };
        assert!(matches!(
            too_many.validate(),
            Err(StapleError::InvalidConfig(_))
        ));

        let huge_pool = GenerationConfig {
            number_pool_size: usize::MAX,
            ..GenerationConfig::default()
        };
        assert!(matches!(
            huge_pool.validate(),
            Err(StapleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_words() {
        let config = GenerationConfig {
            min_words: 0,
            ..GenerationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StapleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_pool_only_when_appending() {
        let mut config = GenerationConfig {
            number_pool_size: 0,
            ..GenerationConfig::default()
        };
        assert!(config.validate().is_err());
        config.append_numbers = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_get_and_set() {
        let mut config = GenerationConfig::default();
        config.set("words", "6").unwrap();
        config.set("separator", "._").unwrap();
        config.set("join-mode", "fixed").unwrap();
        assert_eq!(config.get("words").as_deref(), Some("6"));
        assert_eq!(config.get("separator").as_deref(), Some("._"));
        assert_eq!(config.get("join-mode").as_deref(), Some("fixed"));
    }

    #[test]
    fn test_set_malformed_number_uses_default() {
        let mut config = GenerationConfig::default();
        config.set("words", "6").unwrap();
        config.set("words", "lots").unwrap();
        assert_eq!(config.min_words, DEFAULT_MIN_WORDS);
    }

    #[test]
    fn test_set_unknown_key_fails() {
        let mut config = GenerationConfig::default();
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("join-mode", "sometimes").is_err());
        assert!(config.get("colour").is_none());
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = GenerationConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = GenerationConfig {
            min_words: 5,
            separator: "+".to_string(),
            join_mode: JoinMode::Fixed,
            ..GenerationConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: GenerationConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
