//! Per-resource services
//!
//! Thin typed wrappers over the [`Session`](crate::Session) verb contract:
//! path formatting plus one request per method. Sessions hand these out via
//! their factory methods.

mod calendars;
mod events;
mod folders;
mod messages;

// Re-export the service types
pub use calendars::CalendarService;
pub use events::EventService;
pub use folders::FolderService;
pub use messages::MessageService;
