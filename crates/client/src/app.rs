//! One user session: which view is shown, the active language, and the
//! form and dashboard controllers behind them. Every outcome the user should
//! see comes back as a [`Notice`].

use std::sync::Arc;

use rsvp_core::auth::CredentialStore;
use rsvp_core::dashboard::{Dashboard, PendingDelete};
use rsvp_core::domain::{Language, SubmissionId};
use rsvp_core::form::FormController;
use rsvp_core::notice::Notice;
use rsvp_core::store::{StoreError, SubmissionStore};
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::credentials::credentials_from_config;
use crate::remote::RemoteStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    Login,
    Dashboard,
}

pub struct App {
    language: Language,
    view: View,
    logged_in: bool,
    form: FormController,
    dashboard: Dashboard,
    store: Arc<dyn SubmissionStore>,
    credentials: Box<dyn CredentialStore>,
}

impl App {
    pub fn new(
        language: Language,
        store: Arc<dyn SubmissionStore>,
        credentials: Box<dyn CredentialStore>,
    ) -> Self {
        Self {
            language,
            view: View::Form,
            logged_in: false,
            form: FormController::new(),
            dashboard: Dashboard::new(),
            store,
            credentials,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.language,
            Arc::new(RemoteStore::from_config(config)),
            credentials_from_config(config),
        )
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    pub fn show_form(&mut self) {
        self.view = View::Form;
    }

    /// The admin entry point; goes straight to the dashboard once logged in.
    pub fn show_admin(&mut self) {
        self.view = if self.logged_in {
            View::Dashboard
        } else {
            View::Login
        };
    }

    pub fn login(&mut self, username: &str, password: &str) -> Notice {
        if self.credentials.verify(username, password) {
            info!(username, "admin logged in");
            self.logged_in = true;
            self.view = View::Dashboard;
            Notice::login_succeeded(self.language)
        } else {
            warn!(username, "admin login refused");
            Notice::login_failed(self.language)
        }
    }

    /// Ends the admin session and returns to the login screen.
    pub fn logout(&mut self) {
        self.logged_in = false;
        self.dashboard = Dashboard::new();
        self.view = View::Login;
    }

    pub async fn submit_form(&mut self) -> Notice {
        match self.form.submit(self.store.as_ref()).await {
            Ok(_) => Notice::submission_succeeded(self.language),
            Err(error) => Notice::from_form_error(&error, self.language),
        }
    }

    fn require_login(&self, operation: &'static str) -> Option<Notice> {
        if self.logged_in {
            None
        } else {
            warn!(operation, "dashboard operation refused without login");
            Some(Notice::login_required(self.language))
        }
    }

    /// Reloads the dashboard list. `None` on success.
    pub async fn refresh_dashboard(&mut self) -> Option<Notice> {
        if let Some(notice) = self.require_login("refresh") {
            return Some(notice);
        }
        match self.dashboard.refresh(self.store.as_ref()).await {
            Ok(_) => None,
            Err(StoreError::NotConfigured) => Some(Notice::not_configured(self.language)),
            Err(error) => Some(Notice::load_failed(self.language, error.to_string())),
        }
    }

    /// First half of a delete: the token plus the confirmation prompt.
    /// `None` when the id is not listed or no admin is logged in.
    pub fn request_delete(&self, id: &SubmissionId) -> Option<(PendingDelete, Notice)> {
        if self.require_login("request_delete").is_some() {
            return None;
        }
        let pending = self.dashboard.request_delete(id)?;
        Some((pending, Notice::confirm_delete(self.language)))
    }

    pub async fn confirm_delete(&mut self, pending: PendingDelete) -> Notice {
        if let Some(notice) = self.require_login("confirm_delete") {
            return notice;
        }
        match self
            .dashboard
            .confirm_delete(self.store.as_ref(), pending)
            .await
        {
            Ok(_) => Notice::deleted(self.language),
            Err(StoreError::NotConfigured) => Notice::not_configured(self.language),
            Err(error) => Notice::delete_failed(self.language, &error.to_string()),
        }
    }
}
