//! Document model for parsed dekl sources
//!
//! A parsed document is a tree of [ScopeNode]s. Each node holds its own
//! key/value entries in insertion order plus an ordered list of child
//! scopes. On serialization the children aggregate as an array of tables
//! under the reserved [NESTED_KEY].
//!
//! While parsing, nodes live in a [ScopeArena] and are addressed by index;
//! the stack of open scopes holds indices, never references, so the current
//! node can be mutated without aliasing the rest of the tree. The arena is
//! assembled into the owned tree only once parsing succeeds.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Reserved key under which a scope's children serialize
pub const NESTED_KEY: &str = "nested";

/// A single leaf value in a scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Text(String),
}

/// One nesting level of the output document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScopeNode {
    entries: Vec<(String, Value)>,
    children: Vec<ScopeNode>,
}

impl ScopeNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, overwriting any existing entry with the same key.
    /// An overwrite keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        upsert(&mut self.entries, key.into(), value);
    }

    /// Append a child scope.
    pub fn push_child(&mut self, child: ScopeNode) {
        self.children.push(child);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Child scopes in declaration order.
    pub fn children(&self) -> &[ScopeNode] {
        &self.children
    }

    /// True when the node has no entries and no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.children.is_empty()
    }

    /// Maximum nesting depth below this node; a node with no children has
    /// depth zero.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl Serialize for ScopeNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = self.entries.len() + usize::from(!self.children.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;
        // Scalar entries first: TOML requires values to precede tables.
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        if !self.children.is_empty() {
            map.serialize_entry(NESTED_KEY, &self.children)?;
        }
        map.end()
    }
}

fn upsert(entries: &mut Vec<(String, Value)>, key: String, value: Value) {
    match entries.iter_mut().find(|(existing, _)| *existing == key) {
        Some((_, slot)) => *slot = value,
        None => entries.push((key, value)),
    }
}

/// Index-addressed storage for scope nodes during a parse
///
/// Children always carry a larger index than their parent, since they are
/// allocated while the parent is already open.
#[derive(Debug, Default)]
pub(crate) struct ScopeArena {
    nodes: Vec<ArenaNode>,
}

#[derive(Debug, Default)]
struct ArenaNode {
    entries: Vec<(String, Value)>,
    children: Vec<usize>,
}

impl ScopeArena {
    pub(crate) const ROOT: usize = 0;

    /// Create an arena holding only the root node.
    pub(crate) fn new() -> Self {
        ScopeArena {
            nodes: vec![ArenaNode::default()],
        }
    }

    /// Allocate a new empty scope as the last child of `parent` and return
    /// its index.
    pub(crate) fn alloc_child(&mut self, parent: usize) -> usize {
        let index = self.nodes.len();
        self.nodes.push(ArenaNode::default());
        self.nodes[parent].children.push(index);
        index
    }

    /// Insert an entry into the scope at `index`, overwriting same-key
    /// entries in place.
    pub(crate) fn insert(&mut self, index: usize, key: impl Into<String>, value: Value) {
        upsert(&mut self.nodes[index].entries, key.into(), value);
    }

    /// Assemble the arena into an owned tree rooted at [ScopeArena::ROOT].
    pub(crate) fn into_tree(self) -> ScopeNode {
        let mut built: Vec<Option<ScopeNode>> = (0..self.nodes.len()).map(|_| None).collect();
        // Children have larger indices than their parent, so building from
        // the back guarantees every child is ready before its parent.
        for (index, node) in self.nodes.into_iter().enumerate().rev() {
            let children = node
                .children
                .into_iter()
                .map(|child| built[child].take().unwrap_or_default())
                .collect();
            built[index] = Some(ScopeNode {
                entries: node.entries,
                children,
            });
        }
        built[Self::ROOT].take().unwrap_or_default()
    }
}
