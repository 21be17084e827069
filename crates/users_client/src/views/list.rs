//! List View: all users in a selectable table with New / Edit / Delete actions.

use crate::{
    api::UsersApi,
    error::ApiError,
    model::{Action, User, UserId},
    routes::Route,
};
use tracing::warn;

/// Column headers rendered by the users table.
pub const COLUMNS: [&str; 3] = ["ID", "Name", "Email"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListView {
    users: Vec<User>,
    selected: Option<UserId>,
    loading: bool,
}

impl ListView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn selected(&self) -> Option<UserId> {
        self.selected
    }

    #[must_use]
    pub fn selected_user(&self) -> Option<&User> {
        let id = self.selected?;
        self.users.iter().find(|user| user.id == id)
    }

    #[must_use]
    pub fn is_selected(&self, id: UserId) -> bool {
        self.selected == Some(id)
    }

    /// Marks the list fetch as in flight.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Stores the fetched list. Failures are logged and leave an empty list.
    pub fn finish_load(&mut self, result: Result<Vec<User>, ApiError>) {
        self.loading = false;
        self.users = match result {
            Ok(users) => users,
            Err(err) => {
                warn!("Error fetching users: {err}");
                Vec::new()
            }
        };

        if let Some(id) = self.selected {
            if !self.users.iter().any(|user| user.id == id) {
                self.selected = None;
            }
        }
    }

    /// Fetches all users; `loading` stays set until the request completes.
    pub async fn load<A: UsersApi>(&mut self, api: &A) {
        self.begin_load();
        let result = api.list_users().await;
        self.finish_load(result);
    }

    /// Selects the row with `id`, or clears the selection if it is already selected.
    pub fn toggle_select(&mut self, id: UserId) {
        if self.selected == Some(id) {
            self.selected = None;
        } else if self.users.iter().any(|user| user.id == id) {
            self.selected = Some(id);
        }
    }

    /// Edit and Delete need a selection; New is always available.
    #[must_use]
    pub fn is_enabled(&self, action: Action) -> bool {
        match action {
            Action::New => true,
            Action::Edit | Action::Delete => self.selected.is_some(),
        }
    }

    /// Detail route for `action`, or `None` when the action is disabled.
    #[must_use]
    pub fn navigate(&self, action: Action) -> Option<Route> {
        if !self.is_enabled(action) {
            return None;
        }

        Some(Route::UserDetail {
            id: self.selected,
            action,
        })
    }
}
