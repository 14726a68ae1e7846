use super::Language;

const PARENT_TITLES_TH: &[&str] = &["นาย", "นาง", "นางสาว"];
const PARENT_TITLES_EN: &[&str] = &["Mr.", "Mrs.", "Miss", "Ms."];
const STUDENT_TITLES_TH: &[&str] = &["เด็กชาย", "เด็กหญิง", "นาย", "นางสาว"];
const STUDENT_TITLES_EN: &[&str] = &["Master", "Miss", "Mr."];

/// Honorifics offered for a parent in the given language.
pub fn parent_titles(language: Language) -> &'static [&'static str] {
    match language {
        Language::Thai => PARENT_TITLES_TH,
        Language::English => PARENT_TITLES_EN,
    }
}

/// Honorifics offered for a student in the given language.
pub fn student_titles(language: Language) -> &'static [&'static str] {
    match language {
        Language::Thai => STUDENT_TITLES_TH,
        Language::English => STUDENT_TITLES_EN,
    }
}
