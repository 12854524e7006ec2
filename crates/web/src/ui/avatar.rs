//! Avatar: a round image with a text fallback.
//!
//! The image and the fallback are both rendered; the stylesheet hides the
//! fallback once the image has loaded, so a broken or missing image still
//! leaves something readable in place.

use anyhow::Result;
use serde::Serialize;

use super::HtmlAttribute;
use crate::theme::{Markup, ThemeEngine, class_names};

const ROOT_CLASSES: &str = "relative flex size-8 shrink-0 overflow-hidden rounded-full";
const IMAGE_CLASSES: &str = "aspect-square size-full";
const FALLBACK_CLASSES: &str = "bg-muted flex size-full items-center justify-center rounded-full";

const TEMPLATE: &str = "ui/avatar.html";

/// First character of `name`, used as avatar fallback text.
pub fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// Avatar root.
#[derive(Debug, Clone, Default)]
pub struct Avatar {
    class: Option<String>,
    image: Option<AvatarImage>,
    fallback: Option<AvatarFallback>,
    attributes: Vec<HtmlAttribute>,
}

/// The avatar's image.
#[derive(Debug, Clone)]
pub struct AvatarImage {
    src: String,
    alt: String,
    class: Option<String>,
}

/// Content shown when the image is missing.
#[derive(Debug, Clone, Default)]
pub struct AvatarFallback {
    content: Markup,
    class: Option<String>,
}

#[derive(Serialize)]
struct AvatarView<'a> {
    class: String,
    attributes: &'a [HtmlAttribute],
    image: Option<ImageView<'a>>,
    fallback: Option<FallbackView<'a>>,
}

#[derive(Serialize)]
struct ImageView<'a> {
    class: String,
    src: &'a str,
    alt: &'a str,
}

#[derive(Serialize)]
struct FallbackView<'a> {
    class: String,
    content: &'a str,
}

impl Avatar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra classes merged after the defaults.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn image(mut self, image: AvatarImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn fallback(mut self, fallback: AvatarFallback) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Forward an extra attribute onto the root element.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(HtmlAttribute::new(name, value));
        self
    }

    pub fn render(&self, theme: &ThemeEngine) -> Result<Markup> {
        let view = AvatarView {
            class: merge(ROOT_CLASSES, self.class.as_deref()),
            attributes: &self.attributes,
            image: self.image.as_ref().map(|image| ImageView {
                class: merge(IMAGE_CLASSES, image.class.as_deref()),
                src: &image.src,
                alt: &image.alt,
            }),
            fallback: self.fallback.as_ref().map(|fallback| FallbackView {
                class: merge(FALLBACK_CLASSES, fallback.class.as_deref()),
                content: fallback.content.as_str(),
            }),
        };

        let mut context = tera::Context::new();
        context.insert("avatar", &view);
        theme.render(TEMPLATE, &context)
    }
}

impl AvatarImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: String::new(),
            class: None,
        }
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl AvatarFallback {
    pub fn new(content: impl Into<Markup>) -> Self {
        Self {
            content: content.into(),
            class: None,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

fn merge(defaults: &str, custom: Option<&str>) -> String {
    class_names([defaults, custom.unwrap_or_default()])
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::theme::test_engine;

    #[test]
    fn initial_takes_first_character() {
        assert_eq!(initial("Toji"), "T");
        assert_eq!(initial("élodie"), "é");
        assert_eq!(initial(""), "");
    }

    #[test]
    fn root_has_slot_and_default_classes() {
        let html = Avatar::new().render(&test_engine()).unwrap();
        assert!(html.as_str().contains(r#"data-slot="avatar""#));
        assert!(html.as_str().contains(
            r#"class="relative flex size-8 shrink-0 overflow-hidden rounded-full""#
        ));
        assert!(!html.as_str().contains("<img"));
    }

    #[test]
    fn custom_classes_merge_with_defaults() {
        let html = Avatar::new().class("w-12 h-12").render(&test_engine()).unwrap();
        assert!(html.as_str().contains(
            r#"class="relative flex size-8 shrink-0 overflow-hidden rounded-full w-12 h-12""#
        ));
    }

    #[test]
    fn forwards_attributes() {
        let html = Avatar::new()
            .attribute("data-testid", "custom-avatar")
            .render(&test_engine())
            .unwrap();
        assert!(html.as_str().contains(r#"data-testid="custom-avatar""#));
    }

    #[test]
    fn image_and_fallback() {
        let html = Avatar::new()
            .image(AvatarImage::new("/test.jpg").alt("Test").class("custom-img"))
            .fallback(AvatarFallback::new("JD").class("bg-yellow-500"))
            .render(&test_engine())
            .unwrap();
        let html = html.as_str();

        assert!(html.contains(r#"data-slot="avatar-image""#));
        assert!(html.contains(r#"src="/test.jpg""#));
        assert!(html.contains(r#"alt="Test""#));
        assert!(html.contains(r#"class="aspect-square size-full custom-img""#));
        assert!(html.contains(r#"data-slot="avatar-fallback""#));
        assert!(html.contains("bg-muted flex size-full items-center justify-center rounded-full bg-yellow-500"));
        assert!(html.contains(">JD</span>"));
        assert!(html.find("avatar-image") < html.find("avatar-fallback"));
    }

    #[test]
    fn fallback_text_is_escaped_and_markup_is_not() {
        let html = Avatar::new()
            .fallback(AvatarFallback::new("<b>"))
            .render(&test_engine())
            .unwrap();
        assert!(html.as_str().contains(">&lt;b&gt;</span>"));

        let html = Avatar::new()
            .fallback(AvatarFallback::new(Markup::raw("<svg></svg>")))
            .render(&test_engine())
            .unwrap();
        assert!(html.as_str().contains("><svg></svg></span>"));
    }
}
