//! User storage behind a repository trait
//!
//! Handlers depend on [`UserRepository`]; the service ships with
//! [`InMemoryUserRepository`], a lock-guarded ordered map owned by the
//! application state.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use memory::InMemoryUserRepository;
pub use traits::{RepositoryResult, UserRepository};
