//! Localized modal notifications.

use crate::domain::Language;
use crate::form::FormError;
use crate::i18n::Text;
use crate::store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

/// Title and body already resolved for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            text: text.into(),
        }
    }

    fn localized(kind: NoticeKind, title: Text, text: Text, language: Language) -> Self {
        Self::new(kind, title.get(language), text.get(language))
    }

    pub fn submission_succeeded(language: Language) -> Self {
        Self::localized(
            NoticeKind::Success,
            Text::SubmitSuccessTitle,
            Text::SubmitSuccessText,
            language,
        )
    }

    pub fn incomplete(language: Language) -> Self {
        Self::localized(
            NoticeKind::Error,
            Text::IncompleteTitle,
            Text::IncompleteText,
            language,
        )
    }

    pub fn not_configured(language: Language) -> Self {
        Self::localized(
            NoticeKind::Error,
            Text::ConfigIncompleteTitle,
            Text::ConfigIncompleteText,
            language,
        )
    }

    pub fn load_failed(language: Language, detail: impl Into<String>) -> Self {
        Self::new(
            NoticeKind::Error,
            Text::LoadFailedTitle.get(language),
            detail,
        )
    }

    pub fn submit_failed(language: Language, detail: &str) -> Self {
        Self::new(
            NoticeKind::Error,
            Text::ErrorOccurred.get(language),
            format!("{}: {detail}", Text::SubmitFailedPrefix.get(language)),
        )
    }

    pub fn delete_failed(language: Language, detail: &str) -> Self {
        Self::new(
            NoticeKind::Error,
            Text::ErrorTitle.get(language),
            format!("{}: {detail}", Text::DeleteFailedPrefix.get(language)),
        )
    }

    /// Dashboard operation attempted without an admin session.
    pub fn login_required(language: Language) -> Self {
        Self::localized(
            NoticeKind::Error,
            Text::LoginRequiredTitle,
            Text::LoginRequiredText,
            language,
        )
    }

    pub fn deleted(language: Language) -> Self {
        Self::localized(
            NoticeKind::Success,
            Text::DeletedTitle,
            Text::DeletedText,
            language,
        )
    }

    /// Shown before a delete; the caller keeps the `PendingDelete` token
    /// until the user answers.
    pub fn confirm_delete(language: Language) -> Self {
        Self::localized(
            NoticeKind::Warning,
            Text::ConfirmDeleteTitle,
            Text::ConfirmDeleteText,
            language,
        )
    }

    pub fn login_succeeded(language: Language) -> Self {
        Self::new(NoticeKind::Success, Text::LoginSuccess.get(language), "")
    }

    pub fn login_failed(language: Language) -> Self {
        Self::localized(
            NoticeKind::Error,
            Text::InvalidCredentialsTitle,
            Text::InvalidCredentialsText,
            language,
        )
    }

    pub fn edit_unavailable(language: Language) -> Self {
        Self::localized(
            NoticeKind::Info,
            Text::EditUnavailableTitle,
            Text::EditUnavailableText,
            language,
        )
    }

    pub fn add_unavailable(language: Language) -> Self {
        Self::localized(
            NoticeKind::Info,
            Text::AddUnavailableTitle,
            Text::AddUnavailableText,
            language,
        )
    }

    /// Generic mapping for a failed store call. Callers that know which
    /// operation failed use the specific constructors instead.
    pub fn from_store_error(error: &StoreError, language: Language) -> Self {
        match error {
            StoreError::NotConfigured => Self::not_configured(language),
            other => Self::new(
                NoticeKind::Error,
                Text::ErrorTitle.get(language),
                other.to_string(),
            ),
        }
    }

    pub fn from_form_error(error: &FormError, language: Language) -> Self {
        match error {
            FormError::Incomplete(_) => Self::incomplete(language),
            FormError::Store(StoreError::NotConfigured) => Self::not_configured(language),
            FormError::Store(store) => Self::submit_failed(language, &store.to_string()),
            other => Self::submit_failed(language, &other.to_string()),
        }
    }
}
