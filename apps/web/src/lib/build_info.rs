pub(crate) fn git_commit_hash() -> &'static str {
    match option_env!("USERDESK_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// `v{version} ({sha})`, shown in the page footer.
pub(crate) fn version_label() -> String {
    format!("v{} ({})", env!("CARGO_PKG_VERSION"), git_commit_hash())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_label_carries_version_and_sha() {
        let label = version_label();
        assert!(label.starts_with(&format!("v{}", env!("CARGO_PKG_VERSION"))));
        assert!(label.ends_with(&format!("({})", git_commit_hash())));
    }
}
