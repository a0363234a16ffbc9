// Shared Kernel
// Cross-cutting building blocks used by every bounded context

pub mod application; // Shared application layer patterns
pub mod errors; // Shared error types
pub mod utils; // Logging and timing helpers

// Re-exports for convenience
pub use errors::{AppError, AppResult};
