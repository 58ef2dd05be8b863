//! Domain types for the career-visualizer relay.
//!
//! Nothing in this crate performs I/O beyond reading a users file on request.
//! The server crate builds these values from request bodies and hands them to
//! the collaborator clients in `careerviz-google`.

pub mod audio;
pub mod clock;
pub mod error;
pub mod survey;
pub mod users;

// Re-export commonly used types
pub use audio::AudioPayload;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CoreError;
pub use survey::SurveyRecord;
pub use users::{CredentialTable, Role, UserRecord};
