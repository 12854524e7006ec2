//! Page components.
//!
//! Composition is top-down: [`PageLayout`] holds a [`Header`], which holds
//! the [`NavItems`] list and the [`UserMenu`]. Each component renders its
//! children first and hands the resulting markup to its own template.

pub mod header;
pub mod layout;
pub mod nav_items;
pub mod user_menu;

pub use header::Header;
pub use layout::PageLayout;
pub use nav_items::{NavItems, NavLink};
pub use user_menu::UserMenu;
