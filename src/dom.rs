//! Minimal element tree used as the rendering target for pages.
//!
//! Controllers look up containers by id or class (the equivalent of
//! `querySelector`), append fragments built by [`crate::render`], and the
//! finished [`Document`] is serialized to HTML.

use std::fmt::Write as _;

use thiserror::Error;

const VOID_ELEMENTS: &[&str] = &["area", "br", "hr", "img", "input", "link", "meta", "source"];

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("no element matches `{0}`")]
    MissingTarget(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds every whitespace-separated class name.
    pub fn with_classes(mut self, class_names: &str) -> Self {
        self.add_classes(class_names);
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn add_classes(&mut self, class_names: &str) {
        for name in class_names.split_whitespace() {
            if !self.has_class(name) {
                self.classes.push(name.to_string());
            }
        }
    }

    /// Empty values render as bare boolean attributes.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr_value("id")
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find(pred))
    }

    fn find_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        if pred(self) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Node::Element(el) = child {
                if let Some(found) = el.find_mut(pred) {
                    return Some(found);
                }
            }
        }
        None
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if pred(self) {
            out.push(self);
        }
        for el in self.child_elements() {
            el.collect(pred, out);
        }
    }

    /// Depth-first, self included.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|el| el.id() == Some(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.find_mut(&|el| el.id() == Some(id))
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(&|el| el.has_class(class))
    }

    pub fn find_by_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        self.find_mut(&|el| el.has_class(class))
    }

    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Element> {
        self.find_mut(&|el| el.tag == tag)
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(&|el| el.has_class(class), &mut out);
        out
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(&|el| el.tag == tag, &mut out);
        out
    }

    pub fn require_class_mut(&mut self, class: &str) -> Result<&mut Element, DomError> {
        self.find_by_class_mut(class)
            .ok_or_else(|| DomError::MissingTarget(format!(".{class}")))
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            let _ = write!(
                out,
                " class=\"{}\"",
                html_escape::encode_double_quoted_attribute(&self.classes.join(" "))
            );
        }
        for (name, value) in &self.attrs {
            if value.is_empty() {
                let _ = write!(out, " {name}");
            } else {
                let _ = write!(
                    out,
                    " {name}=\"{}\"",
                    html_escape::encode_double_quoted_attribute(value)
                );
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(&html_escape::encode_text(t)),
                Node::Element(el) => el.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// A full page: title plus `<body>` tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    title: String,
    body: Element,
}

impl Document {
    pub fn new(title: &str, body: Element) -> Self {
        Self {
            title: title.to_string(),
            body,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    pub fn by_id_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        self.body
            .find_by_id_mut(id)
            .ok_or_else(|| DomError::MissingTarget(format!("#{id}")))
    }

    pub fn by_tag_mut(&mut self, tag: &str) -> Result<&mut Element, DomError> {
        self.body
            .find_by_tag_mut(tag)
            .ok_or_else(|| DomError::MissingTarget(tag.to_string()))
    }

    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html><html lang=\"pt-BR\"><head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
             <title>{}</title><link rel=\"stylesheet\" href=\"{BOOTSTRAP_CSS}\"></head>{}\
             <script src=\"{BOOTSTRAP_JS}\"></script></html>",
            html_escape::encode_text(&self.title),
            self.body.to_html(),
        )
    }
}
