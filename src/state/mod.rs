//! Session state management
//!
//! Everything that describes or coordinates the one in-progress timer
//! session: the session record itself, request validation, the observer
//! registry and the session manager that ties them together.

pub mod manager;
pub mod registry;
pub mod session;
pub mod validate;

pub use manager::SessionManager;
pub use registry::{ObserverId, ObserverRegistry};
pub use session::{Phase, TimerRequest, TimerSession};
pub use validate::validate_durations;
