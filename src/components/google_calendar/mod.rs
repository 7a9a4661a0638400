mod actor;
mod handle;
pub mod models;
pub mod token;

pub use handle::GoogleCalendarHandle;
pub use models::CalendarEvent;
