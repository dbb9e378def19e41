//! Application state shared across handlers.

use std::path::PathBuf;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::StorefrontConfig;
use crate::db::Database;
use crate::stores::SlotBridge;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the document store and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    db: Database,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, db: Database) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, db }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the document store.
    #[must_use]
    pub fn db(&self) -> &Database {
        &self.inner.db
    }

    /// Get the slot bridge for one client profile. Each profile owns an
    /// isolated directory under the data root.
    #[must_use]
    pub fn profile_bridge(&self, profile: Uuid) -> SlotBridge {
        SlotBridge::new(self.profile_dir(profile))
    }

    fn profile_dir(&self, profile: Uuid) -> PathBuf {
        self.inner.config.data_dir.join("profiles").join(profile.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_dirs_are_isolated() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            data_dir: PathBuf::from("/tmp/keepanime"),
            seed_on_startup: false,
            sentry_dsn: None,
        };
        let state = AppState::new(config, Database::new());

        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_ne!(state.profile_dir(a), state.profile_dir(b));
        assert!(state.profile_dir(a).starts_with("/tmp/keepanime/profiles"));
    }
}
