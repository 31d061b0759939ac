use crate::escape::{escape_attr, escape_text};

const CARD_CLASSES: &[&str] = &["rounded-lg", "border", "border-gray-200", "p-6", "shadow-sm"];
const TITLE_CLASSES: &[&str] = &["text-xl", "font-semibold", "mb-4"];

/// A container grouping related content.
///
/// Simpler than [`Button`](crate::Button): no style axes, just a fixed base
/// class set with an optional additive override, an optional title rendered
/// above the body, and a mandatory content region. The content is raw,
/// pre-rendered HTML (it may contain other components); the title is plain
/// text and gets escaped.
#[derive(Debug, Clone)]
pub struct Card {
    title: Option<String>,
    children: String,
    class: Option<String>,
}

impl Card {
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            title: None,
            children: children.into(),
            class: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Additive class string, appended after the base classes.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Resolve the final class list.
    pub fn class_list(&self) -> String {
        let mut out = CARD_CLASSES.join(" ");
        if let Some(class) = &self.class {
            out.push(' ');
            out.push_str(class);
        }
        out
    }

    /// Render the card to an HTML string.
    pub fn render(&self) -> String {
        let mut html = String::from("<div class=\"");
        html.push_str(&escape_attr(&self.class_list()));
        html.push_str("\">");
        if let Some(title) = &self.title {
            html.push_str("<h2 class=\"");
            html.push_str(&TITLE_CLASSES.join(" "));
            html.push_str("\">");
            html.push_str(&escape_text(title));
            html.push_str("</h2>");
        }
        html.push_str("<div>");
        html.push_str(&self.children);
        html.push_str("</div></div>");
        html
    }
}
