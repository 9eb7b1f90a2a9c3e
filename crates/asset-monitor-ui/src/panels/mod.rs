//! UI Panels
//!
//! Each panel is a function over `&mut Ui` and borrowed, already derived data.
//! Panels do NOT own state: they report what the user did and the app
//! applies it after rendering.

mod details;
mod landing;
mod status;
mod toolbar;
mod tree;

pub use details::details_panel;
pub use landing::landing_panel;
pub use status::{error_screen, loading_screen};
pub use toolbar::{toolbar, ToolbarData};
pub use tree::tree_panel;
