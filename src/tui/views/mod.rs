//! TUI view components
//!
//! Each component renders one part of the interface from plain data; none of
//! them touch the app state directly.

mod confirmation;
mod detail;
mod footer;
mod header;
pub mod helpers;
mod table;

pub use confirmation::*;
pub use detail::*;
pub use footer::*;
pub use header::*;
pub use table::*;
