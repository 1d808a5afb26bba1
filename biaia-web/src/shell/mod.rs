//! Application shell
//!
//! Composition root for every rendered page. Content is wrapped in three
//! nested scopes, always in the same order: theme outermost, then session,
//! then notifications directly around the page content. Each scope is a
//! capability object supplied at construction; the shell never reaches
//! into their internals.

pub mod notifications;
pub mod session;
pub mod theme;

use std::sync::Arc;

pub use notifications::{Notification, NotificationCenter, NotificationKind, NotificationScope};
pub use session::{Session, SessionScope, StaticSessionProvider};
pub use theme::{Theme, ThemeAttribute, ThemeProvider, ThemeScope, ThemeSettings};

use crate::templates::{DocumentMetadata, base_document};

/// Wraps page content with theme, session and notification scopes.
#[derive(Debug, Clone)]
pub struct ApplicationShell {
    theme: Arc<dyn ThemeScope>,
    session: Arc<dyn SessionScope>,
    notifications: Arc<dyn NotificationScope>,
    metadata: DocumentMetadata,
}

impl ApplicationShell {
    pub fn new(
        theme: Arc<dyn ThemeScope>,
        session: Arc<dyn SessionScope>,
        notifications: Arc<dyn NotificationScope>,
    ) -> Self {
        Self {
            theme,
            session,
            notifications,
            metadata: DocumentMetadata::default(),
        }
    }

    /// Shell with the fixed theme settings, no signed-in user and an empty
    /// notification queue.
    pub fn standard() -> Self {
        Self::new(
            Arc::new(ThemeProvider::default()),
            Arc::new(StaticSessionProvider::anonymous()),
            Arc::new(NotificationCenter::new()),
        )
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    pub fn theme(&self) -> &dyn ThemeScope {
        self.theme.as_ref()
    }

    pub fn session(&self) -> &dyn SessionScope {
        self.session.as_ref()
    }

    pub fn notifications(&self) -> &dyn NotificationScope {
        self.notifications.as_ref()
    }

    /// Renders a full HTML document around `content`.
    pub fn render(&self, content: &str) -> String {
        let body = self.notifications.wrap(content);
        let body = self.session.wrap(&body);
        let body = self.theme.wrap(&body);

        base_document(&self.metadata, &self.theme.root_attributes(), &body)
    }
}

impl Default for ApplicationShell {
    fn default() -> Self {
        Self::standard()
    }
}
