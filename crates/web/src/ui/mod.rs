//! UI primitives.
//!
//! Small, styled building blocks the page components are assembled from.
//! Each primitive carries its default classes, merges caller classes on top
//! and marks its root element with a `data-slot` attribute.

pub mod avatar;
pub mod button;
pub mod dropdown_menu;

use serde::Serialize;

pub use avatar::{Avatar, AvatarFallback, AvatarImage, initial};
pub use button::ButtonVariant;
pub use dropdown_menu::{
    DropdownMenu, DropdownMenuItem, DropdownMenuLabel, DropdownMenuSeparator, ItemAction,
    ItemVariant, MenuEntry, MenuState,
};

/// An extra HTML attribute forwarded onto a primitive's root element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlAttribute {
    pub name: String,
    pub value: String,
}

impl HtmlAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
