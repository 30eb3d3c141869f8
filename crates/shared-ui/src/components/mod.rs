// Standalone presentational pieces
pub mod alert;
pub mod badge;
pub mod card;
pub mod page_header;

// Navigation chrome
pub mod sidebar;

// Re-exports for convenience
pub use alert::*;
pub use badge::*;
pub use card::*;
pub use page_header::*;
pub use sidebar::*;
