//! View state machines. Each view owns its state exclusively; the only thing
//! that crosses between them is a [`Route`](crate::routes::Route).

mod detail;
mod list;

pub use detail::{DELETE_PROMPT, DetailParams, DetailView, Phase, SubmitBlocked, Submission};
pub use list::{COLUMNS, ListView};

#[cfg(test)]
pub(crate) mod fake {
    use crate::{
        api::UsersApi,
        error::ApiError,
        model::{MutationReceipt, NewUser, User, UserId},
    };
    use std::cell::RefCell;

    /// A recorded call against [`FakeApi`].
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Call {
        List,
        Get(UserId),
        Create(NewUser),
        Update(User),
        Delete(UserId),
    }

    /// In-memory [`UsersApi`] that records every call and can be told to fail.
    #[derive(Default)]
    pub struct FakeApi {
        pub users: Vec<User>,
        pub fail_with: Option<ApiError>,
        pub calls: RefCell<Vec<Call>>,
    }

    impl FakeApi {
        pub fn with_users(users: Vec<User>) -> Self {
            Self {
                users,
                ..Self::default()
            }
        }

        pub fn failing(err: ApiError) -> Self {
            Self {
                fail_with: Some(err),
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: Call) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    impl UsersApi for FakeApi {
        async fn list_users(&self) -> Result<Vec<User>, ApiError> {
            self.record(Call::List)?;
            Ok(self.users.clone())
        }

        async fn get_user(&self, id: UserId) -> Result<User, ApiError> {
            self.record(Call::Get(id))?;
            self.users
                .iter()
                .find(|user| user.id == id)
                .cloned()
                .ok_or_else(|| ApiError::Http {
                    status: 404,
                    message: "User not found".to_string(),
                })
        }

        async fn create_user(&self, user: &NewUser) -> Result<MutationReceipt, ApiError> {
            self.record(Call::Create(user.clone()))?;
            Ok(MutationReceipt::default())
        }

        async fn update_user(&self, user: &User) -> Result<MutationReceipt, ApiError> {
            self.record(Call::Update(user.clone()))?;
            Ok(MutationReceipt {
                message: Some("Resource updated successfully.".to_string()),
                user: Some(user.clone()),
            })
        }

        async fn delete_user(&self, id: UserId) -> Result<MutationReceipt, ApiError> {
            self.record(Call::Delete(id))?;
            Ok(MutationReceipt::default())
        }
    }

    pub fn user(id: UserId, name: &str, email: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}
