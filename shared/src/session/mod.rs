pub mod error;
pub mod live_link_session;
pub mod remote_session;
