// Shared Kernel
// Cross-cutting concerns used by every module

pub mod errors; // Shared error types
pub mod utils; // Logging and deadline-bounded execution

// Re-exports for convenience
pub use errors::{AppError, AppResult};
