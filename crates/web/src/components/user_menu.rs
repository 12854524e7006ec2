//! User menu: avatar trigger, identity panel and sign-out.

use anyhow::Result;
use tracing::debug;

use super::nav_items::NavItems;
use crate::models::User;
use crate::nav::{Navigator, SIGN_IN_PATH, SIGN_OUT_PATH};
use crate::theme::{Markup, ThemeEngine, class_names};
use crate::ui::{
    Avatar, AvatarFallback, AvatarImage, ButtonVariant, DropdownMenu, DropdownMenuItem,
    DropdownMenuLabel, DropdownMenuSeparator, MenuState,
};

const TRIGGER_CLASSES: &str = "flex items-center gap-3 text-grey-4 hover:text-yellow-500";
const FALLBACK_CLASSES: &str = "bg-yellow-500 text-yellow-900 text-sm font-bold";
const SEPARATOR_CLASSES: &str = "bg-gray-600";
const WIDE_SEPARATOR_CLASSES: &str = "hidden sm:block bg-gray-600";
const LOGOUT_CLASSES: &str = "text-gray-100 text-md font-medium focus:bg-transparent focus:text-yellow-500 transition-colors cursor-pointer";

/// Label of the sign-out item.
pub const LOGOUT_LABEL: &str = "Logout";

/// The user menu for a page at `current_path`.
#[derive(Debug, Clone, Copy)]
pub struct UserMenu<'a> {
    user: &'a User,
    current_path: Option<&'a str>,
    state: MenuState,
}

impl<'a> UserMenu<'a> {
    pub fn new(user: &'a User, current_path: Option<&'a str>) -> Self {
        Self {
            user,
            current_path,
            state: MenuState::Closed,
        }
    }

    /// Initial panel state. Closed unless asked otherwise.
    pub fn with_state(mut self, state: MenuState) -> Self {
        self.state = state;
        self
    }

    /// Send the user to the sign-in page.
    ///
    /// Each call issues one navigation request. Without a navigator there is
    /// nowhere to go and the call does nothing.
    pub fn sign_out(navigator: Option<&dyn Navigator>) {
        match navigator {
            Some(navigator) => {
                debug!(from = ?navigator.current_path(), "signing out");
                navigator.navigate(SIGN_IN_PATH);
            }
            None => debug!("sign-out requested without a navigator"),
        }
    }

    pub fn render(&self, theme: &ThemeEngine) -> Result<Markup> {
        let mut context = tera::Context::new();
        context.insert("user", self.user);

        context.insert("avatar", self.avatar("h-8 w-8").render(theme)?.as_str());
        let trigger = theme.render("components/user-menu-trigger.html", &context)?;

        context.insert("avatar", self.avatar("h-10 w-10").render(theme)?.as_str());
        let identity = theme.render("components/user-menu-identity.html", &context)?;

        context.insert("label", LOGOUT_LABEL);
        let logout = theme.render("components/user-menu-logout.html", &context)?;

        let nav = NavItems::new(self.current_path).render(theme)?;
        let mobile_nav = Markup::raw(format!(r#"<nav class="sm:hidden">{nav}</nav>"#));

        DropdownMenu::new(trigger)
            .with_state(self.state)
            .trigger_class(class_names([
                ButtonVariant::Ghost.classes().as_str(),
                TRIGGER_CLASSES,
            ]))
            .entry(DropdownMenuLabel::new(identity))
            .entry(DropdownMenuSeparator::new().class(SEPARATOR_CLASSES))
            .entry(
                DropdownMenuItem::new(logout)
                    .submit(SIGN_OUT_PATH)
                    .class(LOGOUT_CLASSES),
            )
            .entry(DropdownMenuSeparator::new().class(WIDE_SEPARATOR_CLASSES))
            .entry(mobile_nav)
            .render(theme)
    }

    fn avatar(&self, size: &str) -> Avatar {
        let mut avatar = Avatar::new()
            .class(size)
            .fallback(AvatarFallback::new(self.user.initial()).class(FALLBACK_CLASSES));

        if let Some(url) = &self.user.avatar_url {
            avatar = avatar.image(AvatarImage::new(url).alt(&self.user.name));
        }

        avatar
    }
}
