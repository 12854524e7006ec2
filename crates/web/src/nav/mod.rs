//! Navigation: the static entry registry, active-route matching, and the
//! navigator seam used by actions that redirect.
//!
//! - [`NAV_ITEMS`] is the ordered list rendered by the header and user menu
//! - [`is_active`] decides which entry is highlighted for a path
//! - [`Navigator`] abstracts "where are we" and "go there"

mod active;
mod navigator;
mod registry;

pub use active::is_active;
pub use navigator::{Navigator, RequestNavigator, SIGN_IN_PATH, SIGN_OUT_PATH};
pub use registry::{NAV_ITEMS, NavEntry, active_entry, find_by_href};
