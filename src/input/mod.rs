pub mod events;

// Re-export the essential types
pub use events::{Cursor, EventHandled, MapEvent};
