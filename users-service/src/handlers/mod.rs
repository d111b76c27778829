//! HTTP handlers for the users API

mod extract;
pub mod info;
pub mod users;

pub use extract::JsonBody;
pub use info::{not_found, service_info};
pub use users::{create_user, delete_user, get_user, list_users, update_user};

pub use crate::health::health;
