use strum_macros::{Display, EnumString};

use crate::escape::{escape_attr, escape_text};

/// Class tokens applied to every button, before any axis contributes.
const BASE_CLASSES: &[&str] = &["font-semibold", "rounded", "transition-colors"];

/// Visual emphasis axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl Variant {
    /// Ordered class tokens contributed by this variant.
    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Self::Primary => &["bg-blue-600", "hover:bg-blue-700", "text-white"],
            Self::Secondary => &["bg-gray-600", "hover:bg-gray-700", "text-white"],
            Self::Danger => &["bg-red-600", "hover:bg-red-700", "text-white"],
        }
    }
}

/// Sizing axis, resolved independently of [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Base,
    Large,
}

impl Size {
    /// Ordered class tokens contributed by this size.
    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Self::Small => &["px-3", "py-1", "text-sm"],
            Self::Base => &["px-4", "py-2", "text-base"],
            Self::Large => &["px-6", "py-3", "text-lg"],
        }
    }
}

/// A clickable button.
///
/// The final class list is the base set, the variant set and the size set in
/// that order, with the caller's additive class string appended last and
/// verbatim — it is never deduplicated or dropped, so overrides stay visible.
/// Arbitrary attributes pass through to the rendered element unchanged, in
/// insertion order.
///
/// # Example
/// ```
/// use greenfield_ui::{Button, Variant};
///
/// let html = Button::new("Delete")
///     .variant(Variant::Danger)
///     .attr("id", "delete-btn")
///     .render();
/// assert!(html.starts_with("<button"));
/// assert!(html.contains(r#"id="delete-btn""#));
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    variant: Variant,
    size: Size,
    class: Option<String>,
    disabled: bool,
    attrs: Vec<(String, String)>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: Variant::default(),
            size: Size::default(),
            class: None,
            disabled: false,
            attrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Additive class string, appended after all axis classes.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Pass an arbitrary attribute through to the rendered element.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Resolve the final class list from the style axes and the override.
    pub fn class_list(&self) -> String {
        let mut out = BASE_CLASSES.join(" ");
        for token in self.variant.classes().iter().chain(self.size.classes()) {
            out.push(' ');
            out.push_str(token);
        }
        if let Some(class) = &self.class {
            out.push(' ');
            out.push_str(class);
        }
        out
    }

    /// Render the button to an HTML string.
    pub fn render(&self) -> String {
        let mut html = String::from("<button class=\"");
        html.push_str(&escape_attr(&self.class_list()));
        html.push('"');
        if self.disabled {
            html.push_str(" disabled");
        }
        for (name, value) in &self.attrs {
            html.push(' ');
            html.push_str(name);
            html.push_str("=\"");
            html.push_str(&escape_attr(value));
            html.push('"');
        }
        html.push('>');
        html.push_str(&escape_text(&self.label));
        html.push_str("</button>");
        html
    }
}
