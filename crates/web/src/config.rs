//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::User;

/// Demo avatar shown for the default display user.
pub const DEFAULT_AVATAR_URL: &str = "https://imgs.search.brave.com/7brhBX22RZi58GivU_1LfadXmB-qFBgU7J_KLrTa27w/rs:fit:500:0:1:0/g:ce/aHR0cHM6Ly9ibG9n/Z2VyLmdvb2dsZXVz/ZXJjb250ZW50LmNv/bS9pbWcvYi9SMjl2/WjJ4bC9BVnZYc0Vp/czY2Y3B1QjlYd2x3/T00zZzQ1RW9ROERQ/eG5mNXhrS2l4WGha/TjlBRURXa2xfYk9z/ODhXTUk3TzNWVmRI/VDlHLTExZURCaE8w/elZWZ1MtVlN6UnJL/X0V2X1VMRG9Kc2h4/UTAxbDFNRXVkbzZ0/SmlNcFFvektIa2Fz/NnJoZVVRT2VGQktH/UUlETUVPbEVQMmdD/MU40dVZSZ0FzazBW/V3VSTWRqblU4Y1pv/czVKU1lHSWlyMXpI/SWg0a2ZCZ2YxL3Mx/NjAwMC1ydy90b2pp/LXBmcC0zMy5qcGc";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Path to the Tera templates (default: ./templates).
    pub templates_dir: PathBuf,

    /// Path to static files; `/assets/*` is served from its `assets/`
    /// subdirectory (default: ./static).
    pub static_dir: PathBuf,

    /// Site name used in titles and the logo alt text (default: Signalist).
    pub site_name: String,

    /// Identity shown in the header's user menu.
    pub display_user: User,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            templates_dir: PathBuf::from("./templates"),
            static_dir: PathBuf::from("./static"),
            site_name: "Signalist".to_string(),
            display_user: User::new("Toji", "tojifushigiro@jjk.com")
                .with_avatar(DEFAULT_AVATAR_URL),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(port) => port.parse().context("PORT must be a valid u16")?,
            None => defaults.port,
        };

        let templates_dir = lookup("TEMPLATES_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.templates_dir);

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let site_name = lookup("SITE_NAME").unwrap_or(defaults.site_name);

        let mut display_user = defaults.display_user;
        if let Some(name) = lookup("DISPLAY_USER_NAME") {
            display_user.name = name;
        }
        if let Some(email) = lookup("DISPLAY_USER_EMAIL") {
            display_user.email = email;
        }
        if let Some(url) = lookup("DISPLAY_USER_AVATAR_URL") {
            display_user = display_user.with_avatar(url);
        }

        Ok(Self {
            port,
            templates_dir,
            static_dir,
            site_name,
            display_user,
        })
    }
}
