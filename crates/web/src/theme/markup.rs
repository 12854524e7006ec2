//! Rendered HTML fragments.

use std::fmt;

use crate::routes::helpers::html_escape;

/// A fragment of HTML ready to be placed into a template.
///
/// Text converted into `Markup` is escaped; only [`Markup::raw`] trusts its
/// input. Components hand each other `Markup` so that a parent never
/// escapes a child's output twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Trusted HTML, inserted verbatim.
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Plain text, HTML-escaped.
    pub fn text(text: &str) -> Self {
        Self(html_escape(text))
    }

    /// Nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Append another fragment after this one.
    pub fn push(&mut self, other: impl Into<Markup>) {
        self.0.push_str(&other.into().0);
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Markup {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Markup {
    fn from(text: String) -> Self {
        Self::text(&text)
    }
}

macro_rules! markup_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Markup {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

markup_from_number!(i32, i64, u32, u64, usize, f64);

impl<T: Into<Markup>> From<Option<T>> for Markup {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<Vec<Markup>> for Markup {
    fn from(nodes: Vec<Markup>) -> Self {
        nodes.into_iter().collect()
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::empty();
        for node in iter {
            out.push(node);
        }
        out
    }
}
