//! Render-tree element.

/// An HTML element with text or child elements.
///
/// Text and attribute values are escaped on render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add whitespace-separated classes. Empty input adds nothing.
    pub fn with_class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(String::from));
        self
    }

    /// Add an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set the text content. Empty text leaves the element empty.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.text = Some(text);
        }
        self
    }

    /// Append a child and return self.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child.
    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Remove all text and children.
    pub fn clear(&mut self) {
        self.text = None;
        self.children.clear();
    }

    /// Replace all content with text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children.clear();
        self.text = Some(text.into());
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Check for a class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Own text, without descendants.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Own text followed by all descendant text.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Render the opening tag.
    pub fn render_open(&self) -> String {
        let mut html = format!("<{}", self.tag);
        if let Some(id) = &self.id {
            html.push_str(&format!(r#" id="{}""#, escape_html(id)));
        }
        if !self.classes.is_empty() {
            html.push_str(&format!(r#" class="{}""#, escape_html(&self.classes.join(" "))));
        }
        for (name, value) in &self.attributes {
            html.push_str(&format!(r#" {}="{}""#, name, escape_html(value)));
        }
        html.push('>');
        html
    }

    /// Render the closing tag.
    pub fn render_close(&self) -> String {
        format!("</{}>", self.tag)
    }

    /// Render the element and its subtree.
    pub fn render(&self) -> String {
        let mut html = self.render_open();
        if let Some(text) = &self.text {
            html.push_str(&escape_html(text));
        }
        for child in &self.children {
            html.push_str(&child.render());
        }
        html.push_str(&self.render_close());
        html
    }
}

/// Escape text for HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
