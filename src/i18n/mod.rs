//! i18n - Languages and Text Direction
//!
//! The closed set of supported display languages, the text direction derived
//! from them, and the static translation tables.

mod dictionary;

pub use dictionary::*;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    /// French, the primary language
    #[default]
    Fr,
    /// Arabic
    Ar,
}

impl Language {
    /// All supported languages, primary first
    pub const ALL: [Language; 2] = [Language::Fr, Language::Ar];

    /// Two-letter code, also the persisted encoding
    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::Ar => "العربية",
        }
    }

    /// Text direction used when this language is active
    pub fn direction(&self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::Fr => Direction::Ltr,
        }
    }

    /// The other supported language
    pub fn toggled(&self) -> Language {
        match self {
            Language::Fr => Language::Ar,
            Language::Ar => Language::Fr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Parses `fr`, `AR`, ` ar-MA `, `fr_FR` and the like by primary subtag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let primary = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == primary)
            .ok_or_else(|| Error::UnsupportedLanguage {
                code: trimmed.to_string(),
            })
    }
}

/// Text flow orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Left-to-right
    #[default]
    Ltr,
    /// Right-to-left
    Rtl,
}

impl Direction {
    /// Value of the root `dir` attribute
    pub fn as_attr(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_language_is_default() {
        assert_eq!(Language::default(), Language::Fr);
        assert_eq!(Language::ALL[0], Language::Fr);
    }

    #[test]
    fn only_arabic_is_right_to_left() {
        assert_eq!(Language::Ar.direction(), Direction::Rtl);
        assert_eq!(Language::Fr.direction(), Direction::Ltr);
        assert_eq!(Direction::Rtl.as_attr(), "rtl");
        assert_eq!(Direction::Ltr.as_attr(), "ltr");
    }

    #[test]
    fn parse_accepts_codes_and_region_tags() {
        assert_eq!("fr".parse::<Language>().ok(), Some(Language::Fr));
        assert_eq!(" AR ".parse::<Language>().ok(), Some(Language::Ar));
        assert_eq!("ar-MA".parse::<Language>().ok(), Some(Language::Ar));
        assert_eq!("fr_FR".parse::<Language>().ok(), Some(Language::Fr));
    }

    #[test]
    fn parse_rejects_unsupported_codes() {
        for code in ["xx", "", "en", "french", "-ar"] {
            let result = code.parse::<Language>();
            assert!(
                matches!(result, Err(Error::UnsupportedLanguage { .. })),
                "{code:?} should be rejected"
            );
        }
    }

    #[test]
    fn toggled_swaps_languages() {
        assert_eq!(Language::Fr.toggled(), Language::Ar);
        assert_eq!(Language::Ar.toggled(), Language::Fr);
    }

    #[test]
    fn code_round_trips_through_display() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().ok(), Some(lang));
        }
    }
}
