use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;

use crate::{config::AppConfig, gate::Role};

/// SessionCookies
///
/// The two request-scoped credentials the access gate works from, as read from the
/// browser's cookie store. The login/logout flows that set and clear these cookies
/// belong to the external auth service; this crate only reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies {
    /// The opaque session credential. Presence is all that matters.
    pub token: Option<String>,
    /// The parsed role label. Unknown labels are dropped to `None`.
    pub role: Option<Role>,
}

impl SessionCookies {
    /// from_jar
    ///
    /// Pulls both cookies out of a jar using the configured cookie names.
    /// Empty cookie values are treated as absent.
    pub fn from_jar(jar: &CookieJar, config: &AppConfig) -> Self {
        let token = jar
            .get(&config.session_cookie)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        let role = jar
            .get(&config.role_cookie)
            .and_then(|cookie| Role::parse(cookie.value()));

        Self { token, role }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role_label(&self) -> Option<String> {
        self.role.as_ref().map(Role::label)
    }
}

/// SessionCookies Extractor Implementation
///
/// Never rejects: a request without cookies is simply anonymous, and it is up to the
/// gate to decide where an anonymous caller may go.
impl<S> FromRequestParts<S> for SessionCookies
where
    S: Send + Sync,
    AppConfig: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(SessionCookies::from_jar(&jar, &config))
    }
}
