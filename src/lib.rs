// Declare modules within this crate
pub mod client;
pub mod errors;
pub mod types;

// Re-export the main components for users of this crate
pub use client::{TodoApiClient, DEFAULT_BASE_URL};
pub use errors::TodoApiError;
pub use types::{NewTodo, Todo, TodoId};
