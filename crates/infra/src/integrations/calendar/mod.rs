//! Calendar integration
//!
//! Publishes class events to Google Calendar using an already-authorized
//! session. Obtaining and refreshing OAuth credentials is not handled here.

pub mod google;
pub mod session;

pub use google::GoogleCalendarPublisher;
pub use session::{StaticTokenSession, ACCESS_TOKEN_ENV};
