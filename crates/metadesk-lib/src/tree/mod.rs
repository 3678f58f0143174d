//! Node tree produced by the parser.
//!
//! Nodes live in an arena owned by [`Tree`] and are addressed by [`NodeId`].
//! A node owns its `children` and `tags` lists (id lists, authoritative for
//! order); `parent`, `next` and `prev` are plain ids used only for navigation.
//! Node text borrows from the parsed source.

mod flags;
mod json;
mod printer;


pub use flags::NodeFlags;
pub use json::{to_json, to_json_pretty};
pub use printer::{GenerateFlags, TreePrinter};

use rowan::{TextRange, TextSize};

/// Index of a node in its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Synthetic root, one per parse.
    File,
    /// A parsed value or structure.
    Main,
    /// An `@name(...)` annotation.
    Tag,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Main => "Main",
            Self::Tag => "Tag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'src> {
    pub kind: NodeKind,
    pub flags: NodeFlags,
    /// Label, empty for anonymous nodes.
    pub string: &'src str,
    /// Full source span of the node, tags and children included.
    pub raw: &'src str,
    pub range: TextRange,
    /// Text of the comment preceding the node, empty if none.
    pub comment: &'src str,
    pub children: Vec<NodeId>,
    pub tags: Vec<NodeId>,
    pub parent: Option<NodeId>,
    pub next: Option<NodeId>,
    pub prev: Option<NodeId>,
}

impl<'src> Node<'src> {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            flags: NodeFlags::empty(),
            string: "",
            raw: "",
            range: TextRange::empty(TextSize::from(0)),
            comment: "",
            children: Vec::new(),
            tags: Vec::new(),
            parent: None,
            next: None,
            prev: None,
        }
    }

    /// Start position in the source.
    #[inline]
    pub fn offset(&self) -> TextSize {
        self.range.start()
    }
}

/// Arena of nodes plus the id of the `File` root.
#[derive(Debug, Clone)]
pub struct Tree<'src> {
    source: &'src str,
    nodes: Vec<Node<'src>>,
    root: NodeId,
}

impl<'src> Tree<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        let mut root = Node::new(NodeKind::File);
        root.raw = source;
        root.range = TextRange::up_to(TextSize::from(source.len() as u32));
        Self {
            source,
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<'src>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<'src> {
        &mut self.nodes[id.index()]
    }

    /// Attaches `children` to `parent` and links siblings.
    pub(crate) fn set_children(&mut self, parent: NodeId, children: Vec<NodeId>) {
        self.link(parent, &children);
        self.node_mut(parent).children = children;
    }

    /// Attaches `tags` to `parent` and links siblings.
    pub(crate) fn set_tags(&mut self, parent: NodeId, tags: Vec<NodeId>) {
        self.link(parent, &tags);
        self.node_mut(parent).tags = tags;
    }

    fn link(&mut self, parent: NodeId, list: &[NodeId]) {
        for (i, &id) in list.iter().enumerate() {
            let prev = i.checked_sub(1).map(|p| list[p]);
            let next = list.get(i + 1).copied();
            let node = self.node_mut(id);
            node.parent = Some(parent);
            node.prev = prev;
            node.next = next;
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root(&self) -> NodeRef<'_, 'src> {
        self.get(self.root)
    }

    pub fn node(&self, id: NodeId) -> &Node<'src> {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> NodeRef<'_, 'src> {
        NodeRef { tree: self, id }
    }

    /// Number of nodes in the arena, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root().child_count() == 0
    }
}

/// Borrowed view of one node with navigation and lookup helpers.
#[derive(Clone, Copy)]
pub struct NodeRef<'t, 'src> {
    tree: &'t Tree<'src>,
    id: NodeId,
}

impl<'t, 'src> NodeRef<'t, 'src> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'t Tree<'src> {
        self.tree
    }

    pub fn node(&self) -> &'t Node<'src> {
        self.tree.node(self.id)
    }

    pub fn kind(&self) -> NodeKind {
        self.node().kind
    }

    pub fn flags(&self) -> NodeFlags {
        self.node().flags
    }

    pub fn string(&self) -> &'src str {
        self.node().string
    }

    pub fn raw(&self) -> &'src str {
        self.node().raw
    }

    pub fn comment(&self) -> &'src str {
        self.node().comment
    }

    pub fn offset(&self) -> TextSize {
        self.node().offset()
    }

    pub fn is_anonymous(&self) -> bool {
        self.string().is_empty() && !self.flags().contains(NodeFlags::STRING_LITERAL)
    }

    pub fn children(
        &self,
    ) -> impl DoubleEndedIterator<Item = NodeRef<'t, 'src>> + use<'t, 'src> {
        let tree = self.tree;
        self.node().children.iter().map(move |&id| tree.get(id))
    }

    pub fn tags(
        &self,
    ) -> impl DoubleEndedIterator<Item = NodeRef<'t, 'src>> + use<'t, 'src> {
        let tree = self.tree;
        self.node().tags.iter().map(move |&id| tree.get(id))
    }

    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    pub fn tag_count(&self) -> usize {
        self.node().tags.len()
    }

    pub fn parent(&self) -> Option<NodeRef<'t, 'src>> {
        self.node().parent.map(|id| self.tree.get(id))
    }

    pub fn next_sibling(&self) -> Option<NodeRef<'t, 'src>> {
        self.node().next.map(|id| self.tree.get(id))
    }

    pub fn prev_sibling(&self) -> Option<NodeRef<'t, 'src>> {
        self.node().prev.map(|id| self.tree.get(id))
    }

    pub fn first_child(&self) -> Option<NodeRef<'t, 'src>> {
        self.children().next()
    }

    pub fn last_child(&self) -> Option<NodeRef<'t, 'src>> {
        self.children().next_back()
    }

    pub fn child_at(&self, index: usize) -> Option<NodeRef<'t, 'src>> {
        self.node().children.get(index).map(|&id| self.tree.get(id))
    }

    /// First child whose label equals `name`.
    pub fn child_by_string(&self, name: &str) -> Option<NodeRef<'t, 'src>> {
        self.children().find(|c| c.string() == name)
    }

    /// First tag whose label equals `name`.
    pub fn tag_by_string(&self, name: &str) -> Option<NodeRef<'t, 'src>> {
        self.tags().find(|t| t.string() == name)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tag_by_string(name).is_some()
    }

    /// Argument `index` of the tag labeled `tag`.
    pub fn tag_arg_at(&self, tag: &str, index: usize) -> Option<NodeRef<'t, 'src>> {
        self.tag_by_string(tag)?.child_at(index)
    }

    /// Pre-order walk over children (tags excluded), starting with `self`.
    pub fn descendants(&self) -> impl Iterator<Item = NodeRef<'t, 'src>> + use<'t, 'src> {
        let mut stack = vec![*self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().rev());
            Some(node)
        })
    }
}

impl std::fmt::Debug for NodeRef<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("string", &self.string())
            .finish()
    }
}

impl PartialEq for NodeRef<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}
