// Session transport for the HTTP layer
pub mod session;

pub use session::{read_session_token, SessionCookie, SESSION_COOKIE};
