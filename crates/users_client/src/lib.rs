//! Client-side core for the userdesk users console.
//!
//! This crate holds everything the browser app needs that is not markup:
//!
//! - [`api`]: a typed client for the external users API (`/users`, `/users/{id}`).
//! - [`routes`]: the client route table and its path/query encoding.
//! - [`views`]: the List View and Detail View state machines.
//! - [`notify`]: transient operator notifications raised by the views.
//!
//! The crate compiles for native targets and `wasm32`; the HTTP client is backed
//! by `reqwest`, which uses `fetch` in the browser. Views never perform I/O on
//! their own: each network step is split into a synchronous `begin_*` / `finish_*`
//! pair so an event loop can drive it, with an `async` convenience wrapper that
//! runs the whole step against any [`UsersApi`].

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod routes;
pub mod views;

pub use api::{HttpUsersApi, UsersApi};
pub use config::ApiConfig;
pub use error::{ApiError, ValidationError};
pub use model::{Action, Draft, MutationReceipt, NewUser, User, UserId};
pub use notify::{Notification, NotificationKind};
pub use routes::Route;
pub use views::{DetailParams, DetailView, ListView, Phase, SubmitBlocked, Submission};

/// User agent sent by native clients.
pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
