//! Shared Components

mod modal;
mod nav;

pub use modal::Modal;
pub use nav::NavBar;
