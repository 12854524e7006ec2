//! Sticky site header.

use anyhow::Result;
use serde::Serialize;

use super::nav_items::NavItems;
use super::user_menu::UserMenu;
use crate::models::User;
use crate::theme::{Markup, ThemeEngine};

/// Logo served from the static assets.
pub const LOGO_SRC: &str = "/assets/icons/logo.svg";

/// Logo linking home, the desktop navigation and the user menu.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    site_name: &'a str,
    user: &'a User,
    current_path: Option<&'a str>,
}

#[derive(Serialize)]
struct HeaderView<'a> {
    site_name: &'a str,
    logo_src: &'static str,
    nav: String,
    user_menu: String,
}

impl<'a> Header<'a> {
    pub fn new(site_name: &'a str, user: &'a User, current_path: Option<&'a str>) -> Self {
        Self {
            site_name,
            user,
            current_path,
        }
    }

    pub fn current_path(&self) -> Option<&'a str> {
        self.current_path
    }

    pub fn render(&self, theme: &ThemeEngine) -> Result<Markup> {
        let view = HeaderView {
            site_name: self.site_name,
            logo_src: LOGO_SRC,
            nav: NavItems::new(self.current_path).render(theme)?.into_string(),
            user_menu: UserMenu::new(self.user, self.current_path)
                .render(theme)?
                .into_string(),
        };

        let mut context = tera::Context::new();
        context.insert("header", &view);
        theme.render("components/header.html", &context)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::theme::test_engine;

    fn render(path: Option<&str>) -> String {
        let user = User::new("Toji", "tojifushigiro@jjk.com");
        Header::new("Signalist", &user, path)
            .render(&test_engine())
            .unwrap()
            .into_string()
    }

    #[test]
    fn logo_links_home() {
        let html = render(Some("/search"));
        assert!(html.starts_with(r#"<header class="header sticky top-0">"#));
        assert!(html.contains(r#"<a href="/" aria-label="Signalist"><img src="/assets/icons/logo.svg""#));
        assert!(html.contains(r#"width="140" height="32" class="h-8 w-auto cursor-pointer""#));
    }

    #[test]
    fn desktop_nav_and_user_menu() {
        let html = render(Some("/watchlist"));
        assert!(html.contains(r#"<nav class="hidden sm:block"><ul"#));
        assert!(html.contains(r#"<details data-slot="dropdown-menu""#));

        let desktop = html.find(r#"<nav class="hidden sm:block">"#).unwrap();
        let menu = html.find(r#"data-slot="dropdown-menu""#).unwrap();
        assert!(desktop < menu);

        // desktop list plus the one inside the menu
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 2);
        assert_eq!(html.matches(r#"href="/watchlist" class="hover:text-yellow-500 transition-colors text-grey-100""#).count(), 2);
    }

    #[test]
    fn nothing_active_without_path() {
        let html = render(None);
        assert!(!html.contains("aria-current"));
    }
}
