//! Middleware layers applied by the server

pub mod request_tracking;
pub mod security_headers;
pub mod timeout;

pub use request_tracking::{
    request_id_layer, request_id_propagation_layer, sensitive_headers_layer, SENSITIVE_HEADERS,
};
pub use security_headers::apply_security_headers;
pub use timeout::apply_request_timeout;
