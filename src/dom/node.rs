//! Element node types stored in the document arena.

use std::collections::BTreeMap;
use std::fmt;

use crate::draw::HexColor;

/// Handle to an element inside a [`Document`](super::Document).
///
/// Ids are only meaningful for the document that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Closed set of element kinds the tree knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Generic block container
    Div,
    /// Clickable button (the only interactive kind)
    Button,
    /// Block of text
    Paragraph,
    /// Inline text
    Span,
}

impl ElementKind {
    /// Lowercase tag name, as used by tag selectors.
    pub fn tag_name(self) -> &'static str {
        match self {
            ElementKind::Div => "div",
            ElementKind::Button => "button",
            ElementKind::Paragraph => "p",
            ElementKind::Span => "span",
        }
    }

    /// Looks up a kind by (case-insensitive) tag name.
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "div" => Some(ElementKind::Div),
            "button" => Some(ElementKind::Button),
            "p" => Some(ElementKind::Paragraph),
            "span" => Some(ElementKind::Span),
            _ => None,
        }
    }
}

/// Axis-aligned rectangle in surface pixels.
///
/// Contains points on its left/top edges but not on its right/bottom edges,
/// so adjacent rectangles never both claim a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        !self.is_empty() && px >= self.x && py >= self.y && px < self.x + self.w && py < self.y + self.h
    }

    /// Center point, rounded toward the top-left.
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }
}

/// Inline style subset the renderers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Fill color of the element box
    pub background_color: Option<HexColor>,
    /// Text color
    pub color: Option<HexColor>,
}

/// A single element in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub id: Option<String>,
    pub class_list: Vec<String>,
    /// Custom data attributes (`data-*`), keyed without the prefix
    pub dataset: BTreeMap<String, String>,
    pub style: Style,
    pub text: String,
    pub bounds: Rect,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    pub(crate) fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            id: None,
            class_list: Vec::new(),
            dataset: BTreeMap::new(),
            style: Style::default(),
            text: String::new(),
            bounds: Rect::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.iter().any(|c| c == class)
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }

    /// Short label for logs, e.g. `button#ok.item`.
    pub fn describe(&self) -> String {
        let mut label = self.kind.tag_name().to_string();
        if let Some(id) = &self.id {
            label.push('#');
            label.push_str(id);
        }
        for class in &self.class_list {
            label.push('.');
            label.push_str(class);
        }
        label
    }
}
