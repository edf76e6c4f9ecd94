//! Owned XML tree
//!
//! Elements keep their attributes and children in document order so that a
//! parse followed by a write reproduces the same structure. Node presence is
//! always tested through `Option`, never by whether an element has children.

/// A child of an [`Element`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
}

/// A named XML element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: add an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Builder: append a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Builder: append a text node.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value of the attribute named `key`, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn push_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((key.into(), value.into()));
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Append text, merging with a trailing text node.
    pub fn push_text(&mut self, text: String) {
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(&text);
        } else {
            self.children.push(Node::Text(text));
        }
    }

    pub(crate) fn push_node(&mut self, node: Node) {
        match node {
            Node::Text(text) => self.push_text(text),
            other => self.children.push(other),
        }
    }

    /// Iterate over child elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// First child element named `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|el| el.name == name)
    }

    /// First child element named `name`, mutably.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// Follow a `/`-separated path of child names, taking the first match at
    /// each step.
    pub fn find(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .try_fold(self, |current, segment| current.child(segment))
    }

    /// Concatenated direct text and CDATA content.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) | Node::CData(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Replace all direct text and CDATA content with `text`.
    ///
    /// Child elements and comments are kept. The new text takes the position
    /// of the first text node, or goes first when there was none.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let position = self
            .children
            .iter()
            .position(|node| matches!(node, Node::Text(_) | Node::CData(_)))
            .unwrap_or(0);
        self.children
            .retain(|node| !matches!(node, Node::Text(_) | Node::CData(_)));
        let position = position.min(self.children.len());
        self.children.insert(position, Node::Text(text.into()));
    }

    fn collect_descendants(
        &self,
        segments: &[&str],
        prefix: &mut Vec<usize>,
        out: &mut Vec<ElementPath>,
    ) {
        for (index, node) in self.children.iter().enumerate() {
            let Node::Element(el) = node else { continue };
            prefix.push(index);
            if el.name == segments[0] {
                el.collect_relative(&segments[1..], prefix, out);
            }
            el.collect_descendants(segments, prefix, out);
            prefix.pop();
        }
    }

    fn collect_relative(&self, segments: &[&str], prefix: &mut Vec<usize>, out: &mut Vec<ElementPath>) {
        let Some((first, rest)) = segments.split_first() else {
            out.push(ElementPath(prefix.clone()));
            return;
        };
        for (index, node) in self.children.iter().enumerate() {
            match node {
                Node::Element(el) if el.name == *first => {
                    prefix.push(index);
                    el.collect_relative(rest, prefix, out);
                    prefix.pop();
                }
                _ => {}
            }
        }
    }
}

/// Location of an element inside a [`Document`], as child indices from the
/// root.
///
/// Paths stay valid as long as no nodes are inserted or removed above the
/// element; changing text content does not invalidate them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementPath(Vec<usize>);

/// A parsed project document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// All elements below the root matching a `/`-separated path, where the
    /// first segment may sit at any depth and the following segments are
    /// direct children. Results are grouped by anchor in document order.
    ///
    /// `select_descendants("track/clipitem")` finds every `clipitem` whose
    /// parent is a `track`, wherever that track is.
    pub fn select_descendants(&self, path: &str) -> Vec<ElementPath> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut out = Vec::new();
        if segments.is_empty() {
            return out;
        }
        self.root
            .collect_descendants(&segments, &mut Vec::new(), &mut out);
        out
    }

    /// Direct children of the root named `name`.
    pub fn select_children(&self, name: &str) -> Vec<ElementPath> {
        let mut out = Vec::new();
        self.root
            .collect_relative(&[name], &mut Vec::new(), &mut out);
        out
    }

    pub fn get(&self, path: &ElementPath) -> Option<&Element> {
        path.0.iter().try_fold(&self.root, |current, &index| {
            match current.children.get(index)? {
                Node::Element(el) => Some(el),
                _ => None,
            }
        })
    }

    pub fn get_mut(&mut self, path: &ElementPath) -> Option<&mut Element> {
        let mut current = &mut self.root;
        for &index in &path.0 {
            current = match current.children.get_mut(index)? {
                Node::Element(el) => el,
                _ => return None,
            };
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(
            Element::new("xmeml").with_child(
                Element::new("sequence").with_child(
                    Element::new("media").with_child(
                        Element::new("video").with_child(
                            Element::new("track")
                                .with_child(Element::new("clipitem").with_attribute("id", "c1"))
                                .with_child(Element::new("transitionitem"))
                                .with_child(Element::new("clipitem").with_attribute("id", "c2")),
                        ),
                    ),
                ),
            ),
        )
    }

    #[test]
    fn test_select_descendants_finds_nested_matches() {
        let doc = sample();
        let paths = doc.select_descendants("track/clipitem");
        let ids: Vec<_> = paths
            .iter()
            .map(|p| doc.get(p).unwrap().attribute("id").unwrap())
            .collect();
        assert_eq!(ids, vec!["c1", "c2"]);
    }

    #[test]
    fn test_select_descendants_excludes_root() {
        let doc = sample();
        assert!(doc.select_descendants("xmeml").is_empty());
        assert_eq!(doc.select_descendants("sequence").len(), 1);
    }

    #[test]
    fn test_childless_element_is_still_present() {
        let el = Element::new("clipitem").with_child(Element::new("pixelaspectratio"));
        let found = el.child("pixelaspectratio");
        assert!(found.is_some());
        assert!(found.unwrap().children().is_empty());
    }

    #[test]
    fn test_find_follows_first_match() {
        let el = Element::new("clipitem").with_child(
            Element::new("file")
                .with_child(Element::new("name").with_text("a.mov"))
                .with_child(Element::new("pathurl").with_text("file:///a.mov")),
        );
        assert_eq!(el.find("file/name").unwrap().text(), "a.mov");
        assert!(el.find("file/missing").is_none());
    }

    #[test]
    fn test_set_text_keeps_child_elements() {
        let mut el = Element::new("name")
            .with_text("old")
            .with_child(Element::new("marker"));
        el.set_text("new");
        assert_eq!(el.text(), "new");
        assert!(el.child("marker").is_some());
        assert!(matches!(el.children()[0], Node::Text(_)));
    }

    #[test]
    fn test_set_text_on_empty_element() {
        let mut el = Element::new("Title");
        el.set_text("clip.mp4");
        assert_eq!(el.text(), "clip.mp4");
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut doc = sample();
        let path = doc.select_descendants("track/clipitem")[1].clone();
        doc.get_mut(&path).unwrap().set_text("x");
        assert_eq!(doc.get(&path).unwrap().text(), "x");
    }

    #[test]
    fn test_select_children_only_top_level() {
        let doc = Document::new(
            Element::new("PremiereData")
                .with_child(Element::new("Media"))
                .with_child(Element::new("Other").with_child(Element::new("Media"))),
        );
        assert_eq!(doc.select_children("Media").len(), 1);
        assert_eq!(doc.select_descendants("Media").len(), 2);
    }
}
