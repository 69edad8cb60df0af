//! Observing the hash tree while it is built.
//!
//! A collector is shown every node of the tree once, in post-order: each chunk chaining value
//! as soon as the chunk is compressed, each parent chaining value right after both of its
//! children, and the root digest last. `n` chunks produce `n - 1` parents and one root, and for
//! `n >= 2` the chunk with counter `k` is the node at [`tree_index(k)`](crate::utils::tree_index).
//! A single chunk message only has the root.

use crate::compress::CVBytes;

/// The structural role of a node shown to a [`HashTreeCollector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The chaining value of a chunk that is not the whole message.
    Chunk,
    /// The chaining value of a non-root parent.
    Parent,
    /// The final digest.
    Root,
}

pub trait HashTreeCollector {
    fn visit(&mut self, kind: NodeKind, hash: &CVBytes);

    /// Called once before hashing with the number of nodes that will be visited.
    fn reserve(&mut self, _nodes: usize) {}
}

/// Ignores the tree.
impl HashTreeCollector for () {
    #[inline(always)]
    fn visit(&mut self, _kind: NodeKind, _hash: &CVBytes) {}
}

/// Keeps the hashes in visiting order, the array layout [`tree_index`](crate::utils::tree_index)
/// addresses.
impl HashTreeCollector for Vec<CVBytes> {
    #[inline]
    fn visit(&mut self, _kind: NodeKind, hash: &CVBytes) {
        self.push(*hash);
    }

    fn reserve(&mut self, nodes: usize) {
        self.reserve_exact(nodes);
    }
}

/// Keeps every node together with its role.
impl HashTreeCollector for Vec<(NodeKind, CVBytes)> {
    #[inline]
    fn visit(&mut self, kind: NodeKind, hash: &CVBytes) {
        self.push((kind, *hash));
    }

    fn reserve(&mut self, nodes: usize) {
        self.reserve_exact(nodes);
    }
}

/// Counts the nodes of each kind without keeping any hash.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeCounter {
    pub chunks: usize,
    pub parents: usize,
    pub roots: usize,
}

impl HashTreeCollector for NodeCounter {
    #[inline]
    fn visit(&mut self, kind: NodeKind, _hash: &CVBytes) {
        match kind {
            NodeKind::Chunk => self.chunks += 1,
            NodeKind::Parent => self.parents += 1,
            NodeKind::Root => self.roots += 1,
        }
    }
}

impl<C: HashTreeCollector + ?Sized> HashTreeCollector for &mut C {
    #[inline]
    fn visit(&mut self, kind: NodeKind, hash: &CVBytes) {
        (**self).visit(kind, hash)
    }

    fn reserve(&mut self, nodes: usize) {
        (**self).reserve(nodes)
    }
}
