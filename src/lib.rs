//! # Userdesk (frontend host)
//!
//! `userdesk` serves the compiled users console (`apps/web`) and tells it where
//! the users API lives. The console itself runs entirely in the browser and talks
//! to the users API directly; this binary never proxies API traffic.
//!
//! ## Routes
//!
//! - `GET /health`: name, version, and build commit.
//! - `GET /config.js`: `window.USERDESK_CONFIG = {"api_base_url": "..."};`, loaded
//!   by `index.html` before the wasm bundle so one build can target any API.
//! - everything else: static files from the dist directory, falling back to
//!   `index.html` so client-side routes such as `/users/3?action=edit` deep-link.

pub mod cli;
pub mod userdesk;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
