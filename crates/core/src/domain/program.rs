use std::fmt;
use std::str::FromStr;

use super::{DomainError, Language};

/// Learning program a student is enrolled in. Each program has its own class
/// list and conference time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Program {
    Kindergarten,
    EnglishProgramme,
    ThaiProgramme,
}

const KINDERGARTEN_CLASSES: &[&str] = &[
    "อนุบาล 1A TP / Kindergarten 1A TP",
    "อนุบาล 1B TP / Kindergarten 1B TP",
    "อนุบาล 2A TP / Kindergarten 2A TP",
    "อนุบาล 3A TP / Kindergarten 3A TP",
    "อนุบาล 3B TP / Kindergarten 3B TP",
    "อนุบาล 1A EP / Kindergarten 1A EP",
    "อนุบาล 2A EP / Kindergarten 2A EP",
    "อนุบาล 3A EP / Kindergarten 3A EP",
    "อนุบาล 3B EP / Kindergarten 3B EP",
];

const ENGLISH_PROGRAMME_CLASSES: &[&str] = &[
    "ป.1A EP / P.1A EP",
    "ป.1B EP / P.1B EP",
    "ป.2A EP / P.2A EP",
    "ป.2B EP / P.2B EP",
    "ป.3A EP / P.3A EP",
    "ป.3B EP / P.3B EP",
    "ป.4A EP / P.4A EP",
    "ป.4B EP / P.4B EP",
    "ป.5A EP / P.5A EP",
    "ป.5B EP / P.5B EP",
    "ป.6A EP / P.6A EP",
    "ป.6B EP / P.6B EP",
    "ม.1A EP / M.1A EP",
    "ม.1B EP / M.1B EP",
    "ม.2A EP / M.2A EP",
    "ม.2B EP / M.2B EP",
    "ม.3A EP / M.3A EP",
    "ม.4A EP / M.4A EP",
    "ม.5A EP / M.5A EP",
    "ม.6A EP / M.6A EP",
];

const THAI_PROGRAMME_CLASSES: &[&str] = &[
    "ป.1A TP / P.1A TP",
    "ป.1B TP / P.1B TP",
    "ป.2A TP / P.2A TP",
    "ป.2B TP / P.2B TP",
    "ป.3A TP / P.3A TP",
    "ป.3B TP / P.3B TP",
    "ป.4A TP / P.4A TP",
    "ป.4B TP / P.4B TP",
    "ป.5A TP / P.5A TP",
    "ป.5B TP / P.5B TP",
    "ป.6A TP / P.6A TP",
    "ป.6B TP / P.6B TP",
    "ม.1A TP / M.1A TP",
    "ม.1B TP / M.1B TP",
    "ม.2A TP / M.2A TP",
    "ม.3A TP / M.3A TP",
    "ม.4A TP / M.4A TP",
    "ม.5A TP / M.5A TP",
    "ม.6A TP / M.6A TP",
];

impl Program {
    pub const ALL: [Program; 3] = [
        Program::Kindergarten,
        Program::EnglishProgramme,
        Program::ThaiProgramme,
    ];

    /// Stable key stored in the `student{n}_program` column.
    pub fn key(self) -> &'static str {
        match self {
            Program::Kindergarten => "kindergarten",
            Program::EnglishProgramme => "english_programme",
            Program::ThaiProgramme => "thai_programme",
        }
    }

    /// Bilingual label shown in selectors and on the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            Program::Kindergarten => "อนุบาล Kindergarten",
            Program::EnglishProgramme => "โปรแกรมภาษาอังกฤษ English Programme",
            Program::ThaiProgramme => "โปรแกรมภาษาไทย Thai Programme",
        }
    }

    pub fn meeting_time(self, language: Language) -> &'static str {
        match (self, language) {
            (Program::Kindergarten, Language::Thai) => "เวลา 09.00-10.00 น.",
            (Program::Kindergarten, Language::English) => "Time 09:00-10:00 AM",
            (Program::EnglishProgramme, Language::Thai) => "เวลา 11.00-12.00 น.",
            (Program::EnglishProgramme, Language::English) => "Time 11:00-12:00 PM",
            (Program::ThaiProgramme, Language::Thai) => "เวลา 13.00-14.00 น.",
            (Program::ThaiProgramme, Language::English) => "Time 01:00-02:00 PM",
        }
    }

    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Program::Kindergarten => KINDERGARTEN_CLASSES,
            Program::EnglishProgramme => ENGLISH_PROGRAMME_CLASSES,
            Program::ThaiProgramme => THAI_PROGRAMME_CLASSES,
        }
    }

    pub fn offers_class(self, class_name: &str) -> bool {
        self.classes().contains(&class_name)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Program {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Program::ALL
            .into_iter()
            .find(|program| program.key() == s)
            .ok_or_else(|| DomainError::UnknownProgram(s.to_string()))
    }
}
