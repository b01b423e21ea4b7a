//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language preference for localized messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "en")]
    English,
}

impl Default for Language {
    fn default() -> Self {
        Language::Korean
    }
}

impl Language {
    /// Extract language from an Accept-Language header value.
    ///
    /// Korean is the service default; an explicit English preference wins
    /// only when no Korean tag appears.
    pub fn from_accept_language(header: &str) -> Self {
        let header_lower = header.to_lowercase();
        if header_lower.contains("ko") {
            Language::Korean
        } else if header_lower.contains("en") {
            Language::English
        } else {
            Language::default()
        }
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
        }
    }

    /// Get language name in English
    pub fn name(&self) -> &'static str {
        match self {
            Language::Korean => "Korean",
            Language::English => "English",
        }
    }

    /// Get native language name
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Korean => "한국어",
            Language::English => "English",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ko" | "kor" | "korean" | "한국어" => Ok(Language::Korean),
            "en" | "eng" | "english" => Ok(Language::English),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
