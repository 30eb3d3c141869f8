pub mod assignment;
pub mod dashboard_shell;
pub mod profile_widget;

pub use assignment::*;
pub use dashboard_shell::*;
pub use profile_widget::*;
