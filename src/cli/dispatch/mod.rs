use crate::cli::actions::{server, Action};
use anyhow::{Context, Result};
use std::path::PathBuf;
use users_client::ApiConfig;

/// Turn parsed arguments into the action to run.
/// # Errors
/// Returns an error if the API base URL is not an absolute http(s) URL.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let api_base_url = matches
        .get_one::<String>("api-base-url")
        .context("missing required argument: --api-base-url")?;

    let api = ApiConfig::new(api_base_url);
    api.validate()
        .with_context(|| format!("invalid --api-base-url: {api_base_url}"))?;

    Ok(Action::Server(server::Args {
        port: matches.get_one::<u16>("port").copied().unwrap_or(3000),
        api,
        dist: matches
            .get_one::<String>("dist")
            .map_or_else(|| PathBuf::from("apps/web/dist"), PathBuf::from),
    }))
}
