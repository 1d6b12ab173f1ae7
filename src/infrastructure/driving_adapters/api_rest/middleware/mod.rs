//! API Middleware
//!
//! Authentication and other middleware for the REST API.

pub mod request_id;
pub mod session;

pub use request_id::{request_id_middleware, RequestId};
pub use session::{add_session_extension, SessionAuth};
