//! Record-list and editor state for the dashboard.
//!
//! DESIGN
//! ======
//! List state and the editor draft are kept apart so a refetch never clobbers
//! in-progress input, and the draft can be dropped on cancel without touching
//! the list.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::errors::GatewayError;
use crate::net::types::{UserInput, UserRecord};

/// Message shown when the phone field does not parse.
pub const PHONE_INVALID: &str = "Phone must be a whole number.";

/// Identifies one `list_users` request; only the newest may land.
pub type LoadTicket = u64;

/// Dashboard record list as last fetched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersState {
    pub items: Vec<UserRecord>,
    pub loading: bool,
    pub error: Option<String>,
    latest_load: LoadTicket,
}

impl UsersState {
    /// Start a load and return its ticket. Earlier tickets become stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_load += 1;
        self.loading = true;
        self.error = None;
        self.latest_load
    }

    /// Apply a `list_users` outcome. On failure the stale items are dropped so
    /// the error replaces the table. Outcomes for a superseded ticket are
    /// ignored; returns whether this one was applied.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<UserRecord>, GatewayError>) -> bool {
        if ticket != self.latest_load {
            log::debug!("dropping superseded user list (load {ticket}, latest {})", self.latest_load);
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn find(&self, id: &str) -> Option<&UserRecord> {
        self.items.iter().find(|r| r.id == id)
    }
}

/// Which mutation a submitted draft dispatches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(String),
}

impl EditorMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "Add User",
            Self::Edit(_) => "Edit User",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Edit(_) => "Save",
        }
    }
}

/// Text buffer behind the create/edit modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone: String,
    pub active: bool,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            date_of_birth: String::new(),
            email: String::new(),
            phone: String::new(),
            active: true,
        }
    }
}

impl From<&UserRecord> for FormDraft {
    fn from(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            date_of_birth: record.date_of_birth.clone(),
            email: record.email.clone(),
            phone: record.phone.to_string(),
            active: record.active,
        }
    }
}

impl FormDraft {
    /// Convert to a mutation payload, parsing the phone text.
    ///
    /// # Errors
    ///
    /// `GatewayError::Validation` when the phone is not a whole number.
    pub fn to_input(&self) -> Result<UserInput, GatewayError> {
        let phone = self
            .phone
            .trim()
            .parse::<i64>()
            .map_err(|_| GatewayError::Validation(PHONE_INVALID.to_owned()))?;
        Ok(UserInput {
            name: Some(self.name.trim().to_owned()),
            date_of_birth: Some(self.date_of_birth.trim().to_owned()),
            email: Some(self.email.trim().to_owned()),
            phone: Some(phone),
            active: Some(self.active),
        })
    }
}

/// Open modal on the dashboard, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DashboardModal {
    #[default]
    Closed,
    Editor(EditorMode),
    ConfirmDelete(String),
}

/// Open modal plus whether its mutation is in flight.
///
/// While `pending`, the modal can be neither replaced nor dismissed, so at
/// most one mutation runs at a time and its completion always refers to the
/// modal that started it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardDialog {
    pub modal: DashboardModal,
    pub pending: bool,
}

impl DashboardDialog {
    /// Show `next`. Refused while a mutation is outstanding.
    pub fn open(&mut self, next: DashboardModal) -> bool {
        if self.pending {
            return false;
        }
        self.modal = next;
        true
    }

    /// Close the modal. Refused while a mutation is outstanding.
    pub fn dismiss(&mut self) -> bool {
        self.open(DashboardModal::Closed)
    }

    /// Mark the open modal's mutation as started and return that modal.
    /// `None` when nothing is open or a mutation is already running.
    pub fn begin_submit(&mut self) -> Option<DashboardModal> {
        if self.pending || self.modal == DashboardModal::Closed {
            return None;
        }
        self.pending = true;
        Some(self.modal.clone())
    }

    /// Settle the running mutation. Success closes the modal; failure keeps it
    /// open for another attempt.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.pending = false;
        if succeeded {
            self.modal = DashboardModal::Closed;
        }
    }
}
