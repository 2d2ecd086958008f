//! Lives table
//!
//! The ordered list of programming languages the player loses, one per wrong
//! guess. The last language is the one left standing when the game is lost,
//! so the lives budget is one less than the table length.

mod embedded;
mod farewell;

pub use embedded::LANGUAGES;
pub use farewell::farewell_text;
#[cfg(test)]
pub(crate) use farewell::all_farewells;

use std::fmt;
use std::fs;
use std::path::Path;

/// 24-bit color parsed from `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#RRGGBB` hex color
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::languages::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#2D519F"), Some(Rgb { r: 0x2d, g: 0x51, b: 0x9f }));
    /// assert_eq!(Rgb::from_hex("2D519F"), None);
    /// ```
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// One life: a language and its chip colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub background: Rgb,
    pub foreground: Rgb,
}

/// Error type for lives table construction
#[derive(Debug)]
pub enum LivesError {
    Io(std::io::Error),
    Empty,
    MalformedRow { line: usize, content: String },
    InvalidColor { line: usize, color: String },
}

impl fmt::Display for LivesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read lives table: {e}"),
            Self::Empty => write!(f, "Lives table must contain at least one language"),
            Self::MalformedRow { line, content } => {
                write!(f, "Line {line}: expected 'name, #bg, #fg', got '{content}'")
            }
            Self::InvalidColor { line, color } => {
                write!(f, "Line {line}: invalid color '{color}'")
            }
        }
    }
}

impl std::error::Error for LivesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LivesError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Ordered, non-empty list of languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivesTable {
    languages: Vec<Language>,
}

impl LivesTable {
    /// Build a table from languages in elimination order
    ///
    /// # Errors
    /// Returns `LivesError::Empty` if `languages` is empty.
    pub fn new(languages: Vec<Language>) -> Result<Self, LivesError> {
        if languages.is_empty() {
            return Err(LivesError::Empty);
        }
        Ok(Self { languages })
    }

    /// The table compiled into the binary
    ///
    /// Rows and colors are checked by the build script, which also refuses an
    /// empty table.
    #[must_use]
    pub fn builtin() -> Self {
        let languages = LANGUAGES
            .iter()
            .map(|&(name, background, foreground)| Language {
                name: name.to_string(),
                background: background.into(),
                foreground: foreground.into(),
            })
            .collect();
        Self { languages }
    }

    /// Parse a table from text with one `name, #bg, #fg` row per line
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    /// Returns `LivesError` on malformed rows, invalid colors or an empty table.
    pub fn parse(content: &str) -> Result<Self, LivesError> {
        let mut languages = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
            let &[name, bg, fg] = fields.as_slice() else {
                return Err(LivesError::MalformedRow {
                    line,
                    content: trimmed.to_string(),
                });
            };
            if name.is_empty() {
                return Err(LivesError::MalformedRow {
                    line,
                    content: trimmed.to_string(),
                });
            }

            let color = |hex: &str| {
                Rgb::from_hex(hex).ok_or_else(|| LivesError::InvalidColor {
                    line,
                    color: hex.to_string(),
                })
            };

            languages.push(Language {
                name: name.to_string(),
                background: color(bg)?,
                foreground: color(fg)?,
            });
        }

        Self::new(languages)
    }

    /// Load a table from a file
    ///
    /// # Errors
    /// Returns `LivesError` if the file cannot be read or fails to parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LivesError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Wrong guesses tolerated before the game is lost
    #[must_use]
    pub fn budget(&self) -> usize {
        self.languages.len().saturating_sub(1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Language> {
        self.languages.get(index)
    }

    /// Name of the language at `index`
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.get(index).map(|language| language.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Language> {
        self.languages.iter()
    }
}

impl Default for LivesTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a LivesTable {
    type Item = &'a Language;
    type IntoIter = std::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
