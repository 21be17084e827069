//! Detail View: create, edit, or confirm deletion of a single user.
//!
//! ```text
//! Idle -> Loading (edit/delete with an id) -> Editing -> Submitting
//!                                                ^          |
//!                                                +- failure +-> success: back to /users
//! ```

use crate::{
    api::UsersApi,
    error::{ApiError, ValidationError},
    model::{Action, Draft, MutationReceipt, NewUser, User, UserId},
    notify::Notification,
    routes::Route,
};
use tracing::{debug, info, warn};

/// Prompt shown before a delete call is issued.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";

/// Navigation input for the Detail View.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetailParams {
    pub id: Option<UserId>,
    pub action: Action,
}

impl DetailParams {
    /// Reads the id path segment and the `action` query value.
    ///
    /// Non-numeric ids count as absent. A missing or unknown action opens the
    /// create form.
    #[must_use]
    pub fn from_parts(id: Option<&str>, action: Option<&str>) -> Self {
        let id = id.and_then(|value| value.trim().parse::<UserId>().ok());
        let action = action
            .and_then(|value| value.parse::<Action>().ok())
            .unwrap_or_default();

        Self { id, action }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Editing,
    Submitting,
}

/// Why a submission did not produce an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// The view is still loading or a call is already in flight.
    Busy,
    Invalid(ValidationError),
    /// The operator declined the delete confirmation.
    NotConfirmed,
}

/// Exactly one API call, chosen by the action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Create(NewUser),
    Update(User),
    Delete(UserId),
}

impl Submission {
    #[must_use]
    pub fn action(&self) -> Action {
        match self {
            Self::Create(_) => Action::New,
            Self::Update(_) => Action::Edit,
            Self::Delete(_) => Action::Delete,
        }
    }

    /// Issues the call against `api`.
    ///
    /// # Errors
    /// Returns the API error unchanged.
    pub async fn dispatch<A: UsersApi>(&self, api: &A) -> Result<MutationReceipt, ApiError> {
        match self {
            Self::Create(user) => api.create_user(user).await,
            Self::Update(user) => api.update_user(user).await,
            Self::Delete(id) => api.delete_user(*id).await,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailView {
    params: DetailParams,
    draft: Draft,
    phase: Phase,
    notification: Option<Notification>,
}

impl DetailView {
    #[must_use]
    pub fn new(params: DetailParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn action(&self) -> Action {
        self.params.action
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.params.action {
            Action::New => "Create New User",
            Action::Edit => "Edit User Details",
            Action::Delete => "Delete User",
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.params.action {
            Action::New => "Create",
            Action::Edit => "Save",
            Action::Delete => "Delete",
        }
    }

    /// Delete renders a read-only id; the other actions edit name and email.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.params.action == Action::Delete
    }

    /// The most recent notification, if any.
    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Starts the view. Returns the id to fetch, or `None` when the form starts empty.
    pub fn begin_fetch(&mut self) -> Option<UserId> {
        match self.params.id {
            Some(id) if self.params.action.reads_existing() => {
                self.phase = Phase::Loading;
                Some(id)
            }
            _ => {
                self.draft = Draft::default();
                self.phase = Phase::Editing;
                None
            }
        }
    }

    /// Populates the draft from the fetched record.
    ///
    /// Returns `false` and leaves the view untouched when it is not loading
    /// `id`, so a response that outlived its route cannot land in a newer form.
    pub fn finish_fetch(&mut self, id: UserId, result: Result<User, ApiError>) -> bool {
        if self.phase != Phase::Loading || self.params.id != Some(id) {
            debug!("Dropping stale fetch of user {id}");
            return false;
        }

        match result {
            Ok(user) => self.draft = Draft::from(user),
            Err(err) => {
                warn!("Error fetching user data: {err}");
                self.draft = Draft {
                    id: self.params.id,
                    ..Draft::default()
                };
                self.notification = Some(Notification::error(format!(
                    "Failed to load the user: {err}"
                )));
            }
        }
        self.phase = Phase::Editing;
        true
    }

    /// Fetches the record for edit/delete, or starts with an empty draft.
    pub async fn load<A: UsersApi>(&mut self, api: &A) {
        if let Some(id) = self.begin_fetch() {
            let result = api.get_user(id).await;
            self.finish_fetch(id, result);
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    /// Validates the draft and builds the single call to make.
    ///
    /// `confirm` is asked only for deletes; it receives [`DELETE_PROMPT`].
    ///
    /// # Errors
    /// Returns why nothing should be sent. Validation failures also raise an
    /// error notification.
    pub fn prepare_submit(
        &mut self,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<Submission, SubmitBlocked> {
        if self.phase != Phase::Editing {
            return Err(SubmitBlocked::Busy);
        }

        let submission = match self.build_submission() {
            Ok(submission) => submission,
            Err(err) => {
                self.notification = Some(Notification::error(err.to_string()));
                return Err(SubmitBlocked::Invalid(err));
            }
        };

        if matches!(submission, Submission::Delete(_)) && !confirm(DELETE_PROMPT) {
            debug!("User deletion cancelled.");
            self.notification = Some(Notification::info("User deletion cancelled."));
            return Err(SubmitBlocked::NotConfirmed);
        }

        self.notification = None;
        self.phase = Phase::Submitting;
        Ok(submission)
    }

    fn build_submission(&self) -> Result<Submission, ValidationError> {
        match self.params.action {
            Action::New => self.draft.to_new_user().map(Submission::Create),
            Action::Edit => {
                let user = self.draft.to_user()?;
                Ok(Submission::Update(user))
            }
            Action::Delete => self
                .draft
                .id
                .or(self.params.id)
                .map(Submission::Delete)
                .ok_or(ValidationError::MissingId),
        }
    }

    /// Records the outcome of a dispatched submission.
    ///
    /// Returns the route to navigate to on success; on failure the view goes back
    /// to editing and stays put.
    pub fn finish_submit(
        &mut self,
        submission: &Submission,
        result: Result<MutationReceipt, ApiError>,
    ) -> Option<Route> {
        let action = submission.action();

        match result {
            Ok(receipt) => {
                info!("User {}: {:?}", action.past_tense(), receipt.user);
                let message = receipt
                    .message
                    .unwrap_or_else(|| format!("Successfully {} the user", action.past_tense()));
                self.notification = Some(Notification::success(message));
                Some(Route::Users)
            }
            Err(err) => {
                warn!("Error trying to {} user: {err}", action.verb());
                self.notification = Some(Notification::error(format!(
                    "Failed to {} the user: {err}",
                    action.verb()
                )));
                self.phase = Phase::Editing;
                None
            }
        }
    }

    /// Validates, confirms, dispatches, and records the outcome in one step.
    ///
    /// # Errors
    /// Returns `SubmitBlocked` when no call was made.
    pub async fn submit<A: UsersApi>(
        &mut self,
        api: &A,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<Option<Route>, SubmitBlocked> {
        let submission = self.prepare_submit(confirm)?;
        let result = submission.dispatch(api).await;
        Ok(self.finish_submit(&submission, result))
    }

    /// Leaves without side effects.
    #[must_use]
    pub fn cancel(&self) -> Route {
        Route::Users
    }
}
