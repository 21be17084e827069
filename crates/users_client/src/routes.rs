//! Client route table. Navigation is the only channel between views, so the
//! detail route carries everything the Detail View needs: an optional id in the
//! path and the action in the `action` query parameter.

use crate::{
    model::{Action, UserId},
    views::DetailParams,
};
use std::fmt;
use url::Url;

/// Path segment used for detail routes that carry no id.
pub const NO_ID_SEGMENT: &str = "new";

pub const HOME: &str = "/";
pub const USERS: &str = "/users";

/// A client-side route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Users,
    UserDetail { id: Option<UserId>, action: Action },
}

impl Route {
    /// Renders the route as a path with query string.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => HOME.to_string(),
            Self::Users => USERS.to_string(),
            Self::UserDetail { id, action } => {
                let segment = id.map_or_else(|| NO_ID_SEGMENT.to_string(), |id| id.to_string());
                format!("{USERS}/{segment}?action={action}")
            }
        }
    }

    /// Parses a path (optionally with query string) into a route.
    ///
    /// Returns `None` for paths outside the route table.
    #[must_use]
    pub fn parse(path_and_query: &str) -> Option<Self> {
        // Any absolute base works; only the path and query are inspected.
        let base = Url::parse("http://userdesk.invalid/").ok()?;
        let url = base.join(path_and_query.trim()).ok()?;
        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|segment| !segment.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Some(Self::Home),
            ["users"] => Some(Self::Users),
            ["users", segment] => {
                let action = url
                    .query_pairs()
                    .find(|(key, _)| key == "action")
                    .map(|(_, value)| value.into_owned());
                let params = DetailParams::from_parts(Some(*segment), action.as_deref());
                Some(Self::UserDetail {
                    id: params.id,
                    action: params.action,
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_paths_carry_id_and_action() {
        let route = Route::UserDetail {
            id: Some(4),
            action: Action::Edit,
        };
        assert_eq!(route.to_path(), "/users/4?action=edit");

        let route = Route::UserDetail {
            id: None,
            action: Action::New,
        };
        assert_eq!(route.to_path(), "/users/new?action=new");
    }

    #[test]
    fn parse_reads_the_route_table() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/users"), Some(Route::Users));
        assert_eq!(Route::parse("/users/"), Some(Route::Users));
        assert_eq!(
            Route::parse("/users/12?action=delete"),
            Some(Route::UserDetail {
                id: Some(12),
                action: Action::Delete,
            })
        );
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("/users/1/extra"), None);
    }

    #[test]
    fn parse_treats_non_numeric_segments_as_missing_id() {
        assert_eq!(
            Route::parse("/users/new?action=new"),
            Some(Route::UserDetail {
                id: None,
                action: Action::New,
            })
        );
    }

    #[test]
    fn parse_defaults_unknown_actions_to_new() {
        assert_eq!(
            Route::parse("/users/3?action=archive"),
            Some(Route::UserDetail {
                id: Some(3),
                action: Action::New,
            })
        );
        assert_eq!(
            Route::parse("/users/3"),
            Some(Route::UserDetail {
                id: Some(3),
                action: Action::New,
            })
        );
    }

    #[test]
    fn rendered_paths_parse_back() {
        for route in [
            Route::Home,
            Route::Users,
            Route::UserDetail {
                id: Some(9),
                action: Action::Delete,
            },
        ] {
            assert_eq!(Route::parse(&route.to_path()), Some(route));
        }
    }
}
