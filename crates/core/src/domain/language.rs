use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// Display language of the form and dashboard. Thai is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Thai,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Thai, Language::English];

    pub fn code(self) -> &'static str {
        match self {
            Language::Thai => "th",
            Language::English => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Thai => Language::English,
            Language::English => Language::Thai,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if normalized.starts_with("th") {
            Ok(Language::Thai)
        } else if normalized.starts_with("en") {
            Ok(Language::English)
        } else {
            Err(DomainError::UnknownLanguage(s.to_string()))
        }
    }
}
