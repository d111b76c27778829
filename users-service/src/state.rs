//! Application state management

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::repository::{InMemoryUserRepository, UserRepository};

/// Application state shared across handlers
///
/// Generic over the user repository so handlers can be exercised against
/// any [`UserRepository`]. Cloning is cheap; the config and repository are
/// shared behind `Arc`s.
pub struct AppState<R = InMemoryUserRepository>
where
    R: UserRepository,
{
    config: Arc<Config>,
    users: Arc<R>,
    started_at: Instant,
}

// Manual impl so `R` itself need not be `Clone`
impl<R: UserRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            users: Arc::clone(&self.users),
            started_at: self.started_at,
        }
    }
}

impl AppState<InMemoryUserRepository> {
    /// Create state backed by an in-memory repository
    ///
    /// The repository is seeded unless `users.seed` is disabled.
    pub fn in_memory(config: Config) -> Self {
        let users = if config.users.seed {
            InMemoryUserRepository::seeded()
        } else {
            InMemoryUserRepository::new()
        };
        Self::new(config, users)
    }
}

impl Default for AppState<InMemoryUserRepository> {
    fn default() -> Self {
        Self::in_memory(Config::default())
    }
}

impl<R: UserRepository> AppState<R> {
    /// Create a new AppState with the given configuration and repository
    pub fn new(config: Config, users: R) -> Self {
        Self {
            config: Arc::new(config),
            users: Arc::new(users),
            started_at: Instant::now(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the user repository
    pub fn users(&self) -> &R {
        &self.users
    }

    /// Time elapsed since the state was created at startup
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_state_is_seeded() {
        let state: AppState = AppState::default();
        assert_eq!(state.users().find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_seed_can_be_disabled() {
        let mut config = Config::default();
        config.users.seed = false;

        let state = AppState::in_memory(config);
        assert_eq!(state.users().find_all().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_repository() {
        let state: AppState = AppState::default();
        let clone = state.clone();
        clone.users().delete(1).await.unwrap();

        assert_eq!(state.users().find_all().await.unwrap().len(), 1);
        assert_eq!(state.config().service.name, clone.config().service.name);
    }
}
