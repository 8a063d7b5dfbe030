//! Configuration schema definitions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::ensure::DEFAULT_DIR_MODE;
use crate::error::{Error, Result};

/// Largest permission mode accepted (setuid, setgid, sticky and rwx bits).
pub const MAX_DIR_MODE: u32 = 0o7777;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, DirMode};
///
/// let config = Config {
///     dir_mode: Some(DirMode::new(0o700)),
///     ..Default::default()
/// };
/// assert_eq!(config.effective_dir_mode(), 0o700);
/// assert_eq!(Config::default().effective_dir_mode(), 0o755);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Permission mode for directories created by the ensurer.
    pub dir_mode: Option<DirMode>,

    /// Log verbosity: `quiet`, `normal` or `verbose`.
    pub log_mode: Option<String>,
}

impl Config {
    /// The directory mode to use, falling back to [`DEFAULT_DIR_MODE`].
    #[must_use]
    pub fn effective_dir_mode(&self) -> u32 {
        self.dir_mode.map_or(DEFAULT_DIR_MODE, DirMode::bits)
    }

    /// Overlay every field set in `other` onto `self`.
    pub fn merge(&mut self, other: Config) {
        if other.dir_mode.is_some() {
            self.dir_mode = other.dir_mode;
        }
        if other.log_mode.is_some() {
            self.log_mode = other.log_mode;
        }
    }
}

/// An octal permission mode such as `0o755`.
///
/// In YAML the mode may be written as a string (`"0o750"`, `"0750"`,
/// `"750"`) or as a bare number whose digits are read as octal (`750`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirMode(u32);

impl DirMode {
    /// Wrap raw mode bits.
    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw mode bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Parse an octal mode string, with or without a `0o` or `0` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the string is not octal or exceeds
    /// [`MAX_DIR_MODE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::config::DirMode;
    ///
    /// assert_eq!(DirMode::parse("0o700").unwrap().bits(), 0o700);
    /// assert_eq!(DirMode::parse("755").unwrap().bits(), 0o755);
    /// assert!(DirMode::parse("789").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0o")
            .or_else(|| trimmed.strip_prefix("0O"))
            .unwrap_or(trimmed);

        let bits = u32::from_str_radix(digits, 8).map_err(|_| Error::Validation {
            field: "dir_mode".into(),
            message: format!("'{s}' is not an octal permission mode"),
        })?;

        if bits > MAX_DIR_MODE {
            return Err(Error::Validation {
                field: "dir_mode".into(),
                message: format!("mode {bits:o} exceeds {MAX_DIR_MODE:o}"),
            });
        }
        Ok(Self(bits))
    }
}

impl fmt::Display for DirMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0o{:o}", self.0)
    }
}

impl Serialize for DirMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DirMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as _;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Number(u32),
            String(String),
        }

        let text = match Helper::deserialize(deserializer)? {
            Helper::Number(n) => n.to_string(),
            Helper::String(s) => s,
        };
        DirMode::parse(&text).map_err(D::Error::custom)
    }
}
