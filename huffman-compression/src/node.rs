use crate::code::{Bit, Code};

/// One element of the byte alphabet.
pub type Symbol = u8;

/// Index of a node inside the arena of the [`Tree`] that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Leaf(Symbol),
    /// Children are always both present in a built tree. A tree reloaded from
    /// a malformed table may be missing one.
    Internal {
        left: Option<NodeId>,
        right: Option<NodeId>,
    },
}

#[derive(Debug, Clone)]
pub struct Node {
    pub value: Value,
    /// Sum of the leaf counts below this node. Only meaningful for trees that
    /// came out of the builder; reloaded trees carry 0 everywhere.
    pub weight: u64,
}

impl Node {
    pub fn leaf(symbol: Symbol, weight: u64) -> Self {
        Node {
            value: Value::Leaf(symbol),
            weight,
        }
    }

    pub fn internal(left: NodeId, right: NodeId, weight: u64) -> Self {
        Node {
            value: Value::Internal {
                left: Some(left),
                right: Some(right),
            },
            weight,
        }
    }

    fn empty() -> Self {
        Node {
            value: Value::Internal {
                left: None,
                right: None,
            },
            weight: 0,
        }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self.value {
            Value::Leaf(symbol) => Some(symbol),
            Value::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.value, Value::Leaf(_))
    }

    pub fn child(&self, bit: Bit) -> Option<NodeId> {
        match (&self.value, bit) {
            (Value::Leaf(_), _) => None,
            (Value::Internal { left, .. }, Bit::Zero) => *left,
            (Value::Internal { right, .. }, Bit::One) => *right,
        }
    }
}

/// Backing storage for the nodes of a [`Tree`].
#[derive(Debug, Clone, Default)]
pub(crate) struct Arena(Vec<Node>);

impl Arena {
    pub fn push(&mut self, node: Node) -> NodeId {
        self.0.push(node);
        NodeId(self.0.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.0[id.0]
    }

    /// Walks `path` from `root`, creating empty internal nodes where a step
    /// has nowhere to go, and puts a leaf for `symbol` at the end.
    ///
    /// A leaf met halfway is turned into an internal node and a node already
    /// sitting at the end of the path is replaced. Either only happens on a
    /// malformed table.
    pub fn place(&mut self, root: Option<NodeId>, symbol: Symbol, path: &Code) -> NodeId {
        let Some(last) = path.len().checked_sub(1) else {
            return match root {
                Some(root) => {
                    self.0[root.0] = Node::leaf(symbol, 0);
                    root
                }
                None => self.push(Node::leaf(symbol, 0)),
            };
        };

        let root = match root {
            Some(root) => root,
            None => self.push(Node::empty()),
        };

        let mut current = root;
        for (index, bit) in path.iter().enumerate() {
            if self.get(current).is_leaf() {
                self.0[current.0] = Node::empty();
            }

            let next = match self.get(current).child(bit) {
                Some(next) if index == last => {
                    self.0[next.0] = Node::leaf(symbol, 0);
                    next
                }
                Some(next) => next,
                None => {
                    let node = if index == last {
                        Node::leaf(symbol, 0)
                    } else {
                        Node::empty()
                    };
                    let next = self.push(node);
                    self.set_child(current, bit, next);
                    next
                }
            };
            current = next;
        }

        root
    }

    fn set_child(&mut self, parent: NodeId, bit: Bit, child: NodeId) {
        if let Value::Internal { left, right } = &mut self.0[parent.0].value {
            match bit {
                Bit::Zero => *left = Some(child),
                Bit::One => *right = Some(child),
            }
        }
    }
}

/// A Huffman tree. Built once, by the builder or by reloading a code table,
/// and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Tree {
    arena: Arena,
    root: NodeId,
}

impl Tree {
    pub(crate) fn new(arena: Arena, root: NodeId) -> Self {
        Tree { arena, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.get(id)
    }

    /// Total count of the symbols the tree was built from.
    pub fn weight(&self) -> u64 {
        self.node(self.root).weight
    }

    /// True when the tree is a single leaf and therefore codes its only
    /// symbol with zero bits.
    pub fn is_single_leaf(&self) -> bool {
        self.node(self.root).is_leaf()
    }

    /// Every leaf with its root-to-leaf path, in pre-order (left before right).
    pub fn leaves(&self) -> Vec<(Symbol, Code)> {
        let mut leaves = Vec::new();
        let mut stack = vec![(self.root, Code::default())];

        while let Some((id, path)) = stack.pop() {
            match self.node(id).value {
                Value::Leaf(symbol) => leaves.push((symbol, path)),
                Value::Internal { left, right } => {
                    if let Some(right) = right {
                        stack.push((right, path.with(Bit::One)));
                    }
                    if let Some(left) = left {
                        stack.push((left, path.with(Bit::Zero)));
                    }
                }
            }
        }

        leaves
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Length of the longest code.
    pub fn depth(&self) -> usize {
        self.leaves()
            .iter()
            .map(|(_, path)| path.len())
            .max()
            .unwrap_or_default()
    }

    /// Whether every internal node has exactly two children. Always true for a
    /// built tree; a reloaded tree is only full if its table was well formed.
    pub fn is_full(&self) -> bool {
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            match self.node(id).value {
                Value::Leaf(_) => {}
                Value::Internal {
                    left: Some(left),
                    right: Some(right),
                } => {
                    stack.push(left);
                    stack.push(right);
                }
                Value::Internal { .. } => return false,
            }
        }

        true
    }
}

/// Two trees are equal when they hold the same symbols at the same paths.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.leaves() == other.leaves()
    }
}

impl Eq for Tree {}
