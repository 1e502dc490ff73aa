use log::{debug, trace};

use crate::{
    frequency::FrequencyTable,
    node::{Arena, Node, NodeId, Tree},
    queue::StableQueue,
};

impl Tree {
    /// Builds the Huffman tree for `frequencies`.
    ///
    /// Leaves are queued in ascending symbol order and the two lightest nodes
    /// are merged until one remains, the first removed becoming the left
    /// child. Ties leave the queue first-in first-out, so the same table always
    /// produces the same tree.
    ///
    /// Returns `None` when every count is zero. A single distinct symbol gives
    /// a tree that is just one leaf.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Option<Self> {
        let mut arena = Arena::default();
        let mut trees = Trees::default();

        trees.0.extend(
            frequencies
                .iter_nonzero()
                .map(|(symbol, count)| (count, arena.push(Node::leaf(symbol, count)))),
        );

        let root = trees.merge(&mut arena)?;
        let tree = Tree::new(arena, root);
        debug!(
            "built huffman tree: {} leaves, depth {}, weight {}",
            tree.leaf_count(),
            tree.depth(),
            tree.weight()
        );
        Some(tree)
    }
}

#[derive(Default)]
struct Trees(StableQueue<NodeId>);

impl Trees {
    fn merge(mut self, arena: &mut Arena) -> Option<NodeId> {
        loop {
            match self.pop_lowest()? {
                PopResult::TreesToMerge { left, right } => {
                    let weight = left.0 + right.0;
                    trace!("merging weights {} and {} into {}", left.0, right.0, weight);

                    let merged = arena.push(Node::internal(left.1, right.1, weight));
                    self.0.push(weight, merged);
                }
                PopResult::Single((_, root)) => return Some(root),
            }
        }
    }

    fn pop_lowest(&mut self) -> Option<PopResult> {
        let left = self.0.pop()?;

        let result = match self.0.pop() {
            Some(right) => PopResult::TreesToMerge { left, right },
            None => PopResult::Single(left),
        };

        Some(result)
    }
}

enum PopResult {
    TreesToMerge {
        left: (u64, NodeId),
        right: (u64, NodeId),
    },
    Single((u64, NodeId)),
}
