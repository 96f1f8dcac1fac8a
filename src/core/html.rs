// src/core/html.rs
//! Query layer over a parsed page.
//!
//! The profile pages lay their tables out as flat runs of sibling `div`s, and
//! several values are bare text nodes between `<b>` labels and `<br>`s. This
//! module exposes just enough to reach them: CSS selection, element text and
//! attributes, and "direct text children that still have a marker element
//! after them in document order".

use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{Error, Result};

/// A parsed page. Only documents with a DOCTYPE are accepted; anything else
/// is treated as a failed fetch (error pages, truncated bodies).
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(source: &str) -> Result<Self> {
        let html = Html::parse_document(source);
        let has_doctype = html.tree.root().children().any(|n| n.value().is_doctype());
        if !has_doctype {
            return Err(Error::unable_to_fetch());
        }
        Ok(Self { html })
    }

    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>> {
        let sel = selector(css)?;
        Ok(self.html.select(&sel).collect())
    }

    pub fn find(&self, css: &str) -> Result<Option<ElementRef<'_>>> {
        let sel = selector(css)?;
        Ok(self.html.select(&sel).next())
    }

    /// Like `find`, but a missing node is a markup error.
    pub fn first(&self, css: &str) -> Result<ElementRef<'_>> {
        self.find(css)?
            .ok_or_else(|| Error::structure(format!("no node matches '{css}'")))
    }

    pub fn cells(&self, css: &str) -> Result<Vec<Cell>> {
        Ok(self.select(css)?.into_iter().map(Cell::from_element).collect())
    }

    /// Text nodes that are direct children of any of `parents`, in document
    /// order, keeping only those followed somewhere later by an element
    /// matching `marker`. Adjacent text is already merged by the parser, so
    /// each entry is the node's whole text.
    pub fn texts_followed_by(&self, parents: &[ElementRef<'_>], marker: &str) -> Result<Vec<String>> {
        let marker = selector(marker)?;
        let parent_ids: Vec<_> = parents.iter().map(|p| p.id()).collect();

        let mut texts = Vec::new();
        let mut followed = 0usize;
        for node in self.html.tree.root().descendants() {
            match node.value() {
                Node::Text(t) => {
                    let direct = node.parent().is_some_and(|p| parent_ids.contains(&p.id()));
                    if direct {
                        texts.push(String::from(&**t));
                    }
                }
                Node::Element(_) => {
                    if ElementRef::wrap(node).is_some_and(|el| marker.matches(&el)) {
                        followed = texts.len();
                    }
                }
                _ => {}
            }
        }
        texts.truncate(followed);
        Ok(texts)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::structure(format!("bad selector '{css}': {e}")))
}

/// Full text content, untrimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Result<&'a str> {
    el.value().attr(name).ok_or_else(|| {
        Error::structure(format!("<{}> has no '{name}' attribute", el.value().name()))
    })
}

/// Direct child elements with the given tag name.
pub fn children_named<'a>(el: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |c| c.value().name() == tag)
}

/// Owned snapshot of one column node: its text, its attributes and the
/// `src` of its first child `<img>`. The column parsers work on these so
/// they can be fed by hand in tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    pub text: String,
    pub attrs: Vec<(String, String)>,
    pub image: Option<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(src.into());
        self
    }

    pub fn from_element(el: ElementRef<'_>) -> Self {
        let image = children_named(el, "img")
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(String::from);
        Self {
            text: text_of(el),
            attrs: el.value().attrs().map(|(k, v)| (s!(k), s!(v))).collect(),
            image,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn require(&self, name: &str) -> Result<&str> {
        self.attr(name)
            .ok_or_else(|| Error::structure(format!("column '{}' has no '{name}' attribute", self.text.trim())))
    }

    pub fn class(&self) -> Option<&str> {
        self.attr("class")
    }
}
