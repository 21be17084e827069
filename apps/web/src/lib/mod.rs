//! Shared frontend utilities: runtime configuration, build metadata, console
//! logging, and the users API handle every route builds its requests from.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod logging;
pub(crate) mod theme;

pub(crate) use api::users_api;
