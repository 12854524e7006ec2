//! Dropdown menu built on the native disclosure element.
//!
//! The root is a `<details>` element and the trigger its `<summary>`, so the
//! browser owns opening, closing and keyboard activation. The server only
//! decides the state the menu is first shown in.

use anyhow::Result;
use serde::Serialize;

use crate::theme::{Markup, ThemeEngine, class_names};

const ROOT_CLASSES: &str = "relative";
const TRIGGER_CLASSES: &str = "list-none cursor-pointer select-none";
const CONTENT_CLASSES: &str = "bg-popover text-popover-foreground absolute right-0 z-50 mt-2 min-w-[8rem] overflow-hidden rounded-md border p-1 shadow-md";
const ITEM_CLASSES: &str = "relative flex w-full cursor-default items-center gap-2 rounded-sm px-2 py-1.5 text-sm outline-hidden select-none focus:bg-accent focus:text-accent-foreground data-[disabled]:pointer-events-none data-[disabled]:opacity-50 data-[inset]:pl-8 data-[variant=destructive]:text-destructive";
const LABEL_CLASSES: &str = "px-2 py-1.5 text-sm font-medium data-[inset]:pl-8";
const SEPARATOR_CLASSES: &str = "bg-border -mx-1 my-1 h-px";

/// Whether the menu panel is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Trigger activation.
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    pub fn open(&mut self) {
        *self = MenuState::Open;
    }

    /// Outside click, Escape, or an item was chosen.
    pub fn dismiss(&mut self) {
        *self = MenuState::Closed;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemVariant {
    #[default]
    Default,
    Destructive,
}

impl ItemVariant {
    fn as_str(self) -> &'static str {
        match self {
            ItemVariant::Default => "default",
            ItemVariant::Destructive => "destructive",
        }
    }
}

/// What choosing an item does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ItemAction {
    /// Nothing; the item is informational.
    #[default]
    None,
    /// Follow a link.
    Link(String),
    /// POST an empty form to the given path.
    Submit(String),
}

#[derive(Debug, Clone, Default)]
pub struct DropdownMenuItem {
    content: Markup,
    class: Option<String>,
    variant: ItemVariant,
    inset: bool,
    disabled: bool,
    action: ItemAction,
}

#[derive(Debug, Clone, Default)]
pub struct DropdownMenuLabel {
    content: Markup,
    class: Option<String>,
    inset: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DropdownMenuSeparator {
    class: Option<String>,
}

/// One child of the menu panel.
#[derive(Debug, Clone)]
pub enum MenuEntry {
    Item(DropdownMenuItem),
    Label(DropdownMenuLabel),
    Separator(DropdownMenuSeparator),
    /// Arbitrary markup placed into the panel as is.
    Content(Markup),
}

/// A dropdown menu: trigger plus panel.
#[derive(Debug, Clone, Default)]
pub struct DropdownMenu {
    state: MenuState,
    class: Option<String>,
    trigger: Markup,
    trigger_class: Option<String>,
    content_class: Option<String>,
    entries: Vec<MenuEntry>,
}

#[derive(Serialize)]
struct MenuView<'a> {
    class: String,
    open: bool,
    trigger: &'a str,
    trigger_class: String,
    content_class: String,
    entries: String,
}

#[derive(Serialize)]
struct ItemView<'a> {
    tag: &'static str,
    class: String,
    variant: &'static str,
    inset: bool,
    disabled: bool,
    href: Option<&'a str>,
    form_action: Option<&'a str>,
    content: &'a str,
}

#[derive(Serialize)]
struct LabelView<'a> {
    class: String,
    inset: bool,
    content: &'a str,
}

#[derive(Serialize)]
struct SeparatorView {
    class: String,
}

impl DropdownMenu {
    pub fn new(trigger: impl Into<Markup>) -> Self {
        Self {
            trigger: trigger.into(),
            ..Self::default()
        }
    }

    pub fn with_state(mut self, state: MenuState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn state_mut(&mut self) -> &mut MenuState {
        &mut self.state
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn trigger_class(mut self, class: impl Into<String>) -> Self {
        self.trigger_class = Some(class.into());
        self
    }

    pub fn content_class(mut self, class: impl Into<String>) -> Self {
        self.content_class = Some(class.into());
        self
    }

    pub fn entry(mut self, entry: impl Into<MenuEntry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Render children first, then the wrapper.
    pub fn render(&self, theme: &ThemeEngine) -> Result<Markup> {
        let entries = self
            .entries
            .iter()
            .map(|entry| entry.render(theme))
            .collect::<Result<Markup>>()?;

        let view = MenuView {
            class: merge(ROOT_CLASSES, self.class.as_deref()),
            open: self.state.is_open(),
            trigger: self.trigger.as_str(),
            trigger_class: merge(TRIGGER_CLASSES, self.trigger_class.as_deref()),
            content_class: merge(CONTENT_CLASSES, self.content_class.as_deref()),
            entries: entries.into_string(),
        };

        let mut context = tera::Context::new();
        context.insert("menu", &view);
        theme.render("ui/dropdown-menu.html", &context)
    }
}

impl MenuEntry {
    fn render(&self, theme: &ThemeEngine) -> Result<Markup> {
        match self {
            MenuEntry::Item(item) => item.render(theme),
            MenuEntry::Label(label) => label.render(theme),
            MenuEntry::Separator(separator) => separator.render(theme),
            MenuEntry::Content(markup) => Ok(markup.clone()),
        }
    }
}

impl DropdownMenuItem {
    pub fn new(content: impl Into<Markup>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn variant(mut self, variant: ItemVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn inset(mut self) -> Self {
        self.inset = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.action = ItemAction::Link(href.into());
        self
    }

    pub fn submit(mut self, action: impl Into<String>) -> Self {
        self.action = ItemAction::Submit(action.into());
        self
    }

    pub fn action(&self) -> &ItemAction {
        &self.action
    }

    fn render(&self, theme: &ThemeEngine) -> Result<Markup> {
        let (tag, href, form_action) = match &self.action {
            ItemAction::None => ("div", None, None),
            ItemAction::Link(href) => ("a", Some(href.as_str()), None),
            ItemAction::Submit(action) => ("button", None, Some(action.as_str())),
        };

        let view = ItemView {
            tag,
            class: merge(ITEM_CLASSES, self.class.as_deref()),
            variant: self.variant.as_str(),
            inset: self.inset,
            disabled: self.disabled,
            href,
            form_action,
            content: self.content.as_str(),
        };

        let mut context = tera::Context::new();
        context.insert("item", &view);
        theme.render("ui/dropdown-menu-item.html", &context)
    }
}

impl DropdownMenuLabel {
    pub fn new(content: impl Into<Markup>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn inset(mut self) -> Self {
        self.inset = true;
        self
    }

    fn render(&self, theme: &ThemeEngine) -> Result<Markup> {
        let view = LabelView {
            class: merge(LABEL_CLASSES, self.class.as_deref()),
            inset: self.inset,
            content: self.content.as_str(),
        };

        let mut context = tera::Context::new();
        context.insert("label", &view);
        theme.render("ui/dropdown-menu-label.html", &context)
    }
}

impl DropdownMenuSeparator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    fn render(&self, theme: &ThemeEngine) -> Result<Markup> {
        let view = SeparatorView {
            class: merge(SEPARATOR_CLASSES, self.class.as_deref()),
        };

        let mut context = tera::Context::new();
        context.insert("separator", &view);
        theme.render("ui/dropdown-menu-separator.html", &context)
    }
}

impl From<DropdownMenuItem> for MenuEntry {
    fn from(item: DropdownMenuItem) -> Self {
        MenuEntry::Item(item)
    }
}

impl From<DropdownMenuLabel> for MenuEntry {
    fn from(label: DropdownMenuLabel) -> Self {
        MenuEntry::Label(label)
    }
}

impl From<DropdownMenuSeparator> for MenuEntry {
    fn from(separator: DropdownMenuSeparator) -> Self {
        MenuEntry::Separator(separator)
    }
}

impl From<Markup> for MenuEntry {
    fn from(markup: Markup) -> Self {
        MenuEntry::Content(markup)
    }
}

fn merge(defaults: &str, custom: Option<&str>) -> String {
    class_names([defaults, custom.unwrap_or_default()])
}
