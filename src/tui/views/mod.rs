//! TUI view components
//!
//! Each component renders one part of the interface. Views are pure
//! functions of the state handed to them; no component mutates UX state.

mod file_list;
mod footer;
mod header;
mod help;
mod helpers;
mod history;
mod notifications;
mod preview;
mod progress;

pub use file_list::*;
pub use footer::*;
pub use header::*;
pub use help::*;
pub use helpers::*;
pub use history::*;
pub use notifications::*;
pub use preview::*;
pub use progress::*;
