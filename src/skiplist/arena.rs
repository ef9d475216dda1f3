//! Index-addressed storage for skiplist nodes.
//!
//! Links between nodes are [`NodeId`]s into the arena, never references, so
//! the four-way graph has a single owner. Released slots are recycled.

use crate::skiplist::skipnode::SkipNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

pub struct NodeArena<V> {
    nodes: Vec<Option<SkipNode<V>>>,
    free_list: Vec<NodeId>,
}

impl<V> NodeArena<V> {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), free_list: Vec::new() }
    }

    pub fn alloc(&mut self, node: SkipNode<V>) -> NodeId {
        if let Some(id) = self.free_list.pop() {
            self.nodes[id.0] = Some(node);
            id
        } else {
            let id = NodeId(self.nodes.len());
            self.nodes.push(Some(node));
            id
        }
    }

    pub fn get(&self, id: NodeId) -> &SkipNode<V> {
        match self.nodes.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node id {:?}", id),
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut SkipNode<V> {
        match self.nodes.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node id {:?}", id),
        }
    }

    /// Takes the node out of the arena; its slot is reused by later allocations.
    pub fn release(&mut self, id: NodeId) -> SkipNode<V> {
        match self.nodes.get_mut(id.0).and_then(Option::take) {
            Some(node) => {
                self.free_list.push(id);
                node
            }
            None => panic!("double release of node id {:?}", id),
        }
    }

    // number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
    }
}
