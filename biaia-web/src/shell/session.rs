//! Session scope - who is signed in for the current render.
//!
//! Authentication itself is owned by the external identity provider; this
//! module only carries the resulting session to rendered content.

use std::fmt;

use chrono::{DateTime, Utc};
use html_escape::encode_double_quoted_attribute;
use serde::{Deserialize, Serialize};

/// Authenticated session as handed over by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Capability giving rendered content access to the signed-in user.
pub trait SessionScope: Send + Sync + fmt::Debug {
    /// The live session, or `None` for anonymous visitors.
    fn current_session(&self) -> Option<Session>;

    /// Wraps `children` in the session scope.
    fn wrap(&self, children: &str) -> String {
        match self.current_session() {
            Some(session) => format!(
                r#"<div data-scope="session" data-session-state="authenticated" data-user-id="{}">{children}</div>"#,
                encode_double_quoted_attribute(&session.user_id)
            ),
            None => format!(
                r#"<div data-scope="session" data-session-state="anonymous">{children}</div>"#
            ),
        }
    }
}

/// Session scope holding a fixed session.
///
/// Expired sessions are reported as anonymous.
#[derive(Debug, Clone, Default)]
pub struct StaticSessionProvider {
    session: Option<Session>,
}

impl StaticSessionProvider {
    pub fn anonymous() -> Self {
        Self { session: None }
    }

    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }
}

impl SessionScope for StaticSessionProvider {
    fn current_session(&self) -> Option<Session> {
        self.session
            .as_ref()
            .filter(|session| !session.is_expired_at(Utc::now()))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn session_expiring_in(delta: Duration) -> Session {
        Session {
            user_id: "user-42".to_string(),
            email: Some("parent@example.com".to_string()),
            expires_at: Utc::now() + delta,
        }
    }

    #[test]
    fn test_anonymous_wrap() {
        let provider = StaticSessionProvider::anonymous();

        assert!(provider.current_session().is_none());
        assert_eq!(
            provider.wrap("x"),
            r#"<div data-scope="session" data-session-state="anonymous">x</div>"#
        );
    }

    #[test]
    fn test_signed_in_wrap() {
        let provider = StaticSessionProvider::signed_in(session_expiring_in(Duration::hours(1)));

        assert_eq!(
            provider.current_session().map(|s| s.user_id),
            Some("user-42".to_string())
        );
        assert!(provider.wrap("x").contains(r#"data-user-id="user-42""#));
    }

    #[test]
    fn test_user_id_escaped_in_attribute() {
        let provider = StaticSessionProvider::signed_in(Session {
            user_id: r#"x" onmouseover="alert(1)"#.to_string(),
            ..session_expiring_in(Duration::hours(1))
        });

        let html = provider.wrap("x");
        assert!(!html.contains(r#"x" onmouseover"#));
        assert!(html.contains(r#"data-user-id="x&quot; onmouseover=&quot;alert(1)""#));
    }

    #[test]
    fn test_expired_session_is_anonymous() {
        let provider =
            StaticSessionProvider::signed_in(session_expiring_in(Duration::minutes(-5)));

        assert!(provider.current_session().is_none());
        assert!(provider.wrap("x").contains("anonymous"));
    }
}
