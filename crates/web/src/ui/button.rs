//! Button styles.

/// Visual variant of a button-like element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    /// No background until hovered.
    Ghost,
}

const BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 outline-none focus-visible:ring-[3px]";

impl ButtonVariant {
    /// Class list for this variant, base classes included.
    pub fn classes(self) -> String {
        let variant = match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90",
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
        };
        crate::theme::class_names([BASE, variant, "h-9 px-4 py-2"])
    }
}
