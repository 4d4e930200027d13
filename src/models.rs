use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::gate::{self, Verdict};

// --- Access API Schemas ---

/// AccessDecision
///
/// Response of `GET /api/access`. Lets client-side navigation ask the gate before
/// changing route, with the same cookies a full page load would carry.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, PartialEq)]
#[ts(export)]
pub struct AccessDecision {
    /// The path that was evaluated.
    pub path: String,
    /// The role label the gate saw, if any.
    pub role: Option<String>,
    /// Whether a session credential was present.
    pub authenticated: bool,
    /// `"continue"` or `"redirect"`.
    pub verdict: String,
    /// Redirect target. Absent when the verdict is `continue`.
    pub location: Option<String>,
}

impl AccessDecision {
    pub fn new(path: String, role: Option<String>, authenticated: bool, verdict: Verdict) -> Self {
        let (verdict, location) = match verdict.location() {
            Some(location) => ("redirect".to_string(), Some(location.to_string())),
            None => ("continue".to_string(), None),
        };
        Self {
            path,
            role,
            authenticated,
            verdict,
            location,
        }
    }
}

/// RouteTable
///
/// Response of `GET /api/access/routes`: the static partition of the admin area.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, PartialEq)]
#[ts(export)]
pub struct RouteTable {
    pub admin_root: String,
    /// Sections a management officer may not open.
    pub catalog_restricted: Vec<String>,
    /// Sections a catalog officer may not open.
    pub management_restricted: Vec<String>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            admin_root: gate::ADMIN_ROOT.to_string(),
            catalog_restricted: gate::CATALOG_RESTRICTED.iter().map(|p| p.to_string()).collect(),
            management_restricted: gate::MANAGEMENT_RESTRICTED
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// AccessQuery
///
/// Query parameters of `GET /api/access`.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct AccessQuery {
    /// The path to evaluate, e.g. `/admin/books`.
    pub path: String,
}

// --- Page Shell Schemas ---

/// Area
///
/// Which part of the application a page belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Area {
    Public,
    Authenticated,
    Admin,
}

/// PageView
///
/// Descriptor returned for every page the gate let through. The frontend renders the
/// actual screen from it.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, PartialEq)]
#[ts(export)]
pub struct PageView {
    pub path: String,
    pub area: Area,
    pub title: String,
}

impl PageView {
    pub fn new(path: impl Into<String>, area: Area, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            area,
            title: title.into(),
        }
    }
}

/// ForbiddenView
///
/// Body of the `/forbidden` page. The message depends on who was turned away.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, PartialEq)]
#[ts(export)]
pub struct ForbiddenView {
    pub role: Option<String>,
    pub message: String,
}
