//! Ordered access rules, evaluated first match wins.
//!
//! | Method | Paths | Requirement |
//! |---|---|---|
//! | any | `/register`, `/login/**` | public |
//! | GET | `/health`, `/ready`, `/docs/**`, `/api-docs/**` | public |
//! | POST | `/actorsCasts`, `/actors`, `/directors`, `/movies` | ADMIN |
//! | DELETE | `/**` | ADMIN |
//! | GET | `/actorsCasts/**`, `/actors/**`, `/directors/**`, `/movies/**`, `/users/**`, `/feedbacks/**` | USER or ADMIN |
//! | other | | authenticated |

use crate::entities::v1::users::Role;
use crate::security::Identity;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Public,
    AnyRole(&'static [Role]),
    Authenticated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(Denial),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    /// No valid bearer token
    Unauthenticated,
    /// Authenticated without the required role
    Forbidden,
}

#[derive(Debug)]
pub struct Rule {
    /// `None` matches every method
    pub method: Option<&'static str>,
    pub patterns: &'static [&'static str],
    pub requirement: Requirement,
}

/// Redirect target of every denial, always public through `/login/**`
pub const LOGIN_PATH: &str = "/login";

const ADMIN: &[Role] = &[Role::Admin];
const USER_OR_ADMIN: &[Role] = &[Role::User, Role::Admin];

pub static RULES: &[Rule] = &[
    Rule {
        method: None,
        patterns: &["/register", "/login/**"],
        requirement: Requirement::Public,
    },
    Rule {
        method: Some("GET"),
        patterns: &["/health", "/ready", "/docs/**", "/api-docs/**"],
        requirement: Requirement::Public,
    },
    Rule {
        method: Some("POST"),
        patterns: &["/actorsCasts", "/actors", "/directors", "/movies"],
        requirement: Requirement::AnyRole(ADMIN),
    },
    Rule {
        method: Some("DELETE"),
        patterns: &["/**"],
        requirement: Requirement::AnyRole(ADMIN),
    },
    Rule {
        method: Some("GET"),
        patterns: &[
            "/actorsCasts/**",
            "/actors/**",
            "/directors/**",
            "/movies/**",
            "/users/**",
            "/feedbacks/**",
        ],
        requirement: Requirement::AnyRole(USER_OR_ADMIN),
    },
];

/// Requirement of the first rule matching `method` and `path`
pub fn requirement(method: &str, path: &str) -> Requirement {
    RULES
        .iter()
        .find(|rule| {
            rule.method.is_none_or(|m| m.eq_ignore_ascii_case(method))
                && rule.patterns.iter().any(|pattern| matches(pattern, path))
        })
        .map(|rule| rule.requirement)
        .unwrap_or(Requirement::Authenticated)
}

pub fn authorize(method: &str, path: &str, identity: Option<&Identity>) -> Decision {
    match (requirement(method, path), identity) {
        (Requirement::Public, _) => Decision::Allow,
        (_, None) => Decision::Deny(Denial::Unauthenticated),
        (Requirement::Authenticated, Some(_)) => Decision::Allow,
        (Requirement::AnyRole(roles), Some(identity)) => {
            if identity.has_any_role(roles) {
                Decision::Allow
            } else {
                Decision::Deny(Denial::Forbidden)
            }
        }
    }
}

/// Ant-style matching: `*` is exactly one segment, a trailing `**` is zero or
/// more segments. A trailing slash on the path is ignored.
pub fn matches(pattern: &str, path: &str) -> bool {
    let pattern: Vec<&str> = segments(pattern).collect();
    let path: Vec<&str> = segments(path).collect();

    matches_segments(&pattern, &path)
}

fn segments(value: &str) -> impl Iterator<Item = &str> {
    value.split('/').filter(|segment| !segment.is_empty())
}

fn matches_segments(pattern: &[&str], path: &[&str]) -> bool {
    match (pattern.split_first(), path.split_first()) {
        (None, None) => true,
        (Some((&"**", rest)), _) => {
            (0..=path.len()).any(|skip| matches_segments(rest, &path[skip..]))
        }
        (Some((&"*", rest)), Some((_, path_rest))) => matches_segments(rest, path_rest),
        (Some((head, rest)), Some((segment, path_rest))) => {
            head == segment && matches_segments(rest, path_rest)
        }
        _ => false,
    }
}
