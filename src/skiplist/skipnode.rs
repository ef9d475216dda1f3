use crate::skiplist::arena::{NodeArena, NodeId};
use crate::skiplist::skipkey::SkipKey;

pub struct SkipNode<V> {
    pub key: SkipKey,
    // only the level 0 node of a tower holds the value
    pub value: Option<V>,
    pub next: Option<NodeId>,
    pub prev: Option<NodeId>,
    pub below: Option<NodeId>,
    pub above: Option<NodeId>,
}

impl<V> SkipNode<V> {
    pub fn new(key: SkipKey, value: Option<V>) -> Self {
        return SkipNode {
            key,
            value,
            next: None,
            prev: None,
            below: None,
            above: None,
        };
    }

    pub fn link(&self, direction: &Direction) -> Option<NodeId> {
        match direction {
            Direction::Next => self.next,
            Direction::Prev => self.prev,
            Direction::Below => self.below,
            Direction::Above => self.above,
        }
    }
}

pub enum Direction {
    Next,
    Prev,
    Below,
    Above,
}

// follows one kind of link from a starting node, yielding the start first
pub struct SkipNodeIterator<'a, V> {
    arena: &'a NodeArena<V>,
    current: Option<NodeId>,
    direction: Direction,
}

impl<'a, V> SkipNodeIterator<'a, V> {
    pub fn new(arena: &'a NodeArena<V>, current: NodeId, direction: Direction) -> SkipNodeIterator<'a, V> {
        return SkipNodeIterator {
            arena,
            current: Some(current),
            direction,
        };
    }
}

impl<'a, V> Iterator for SkipNodeIterator<'a, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self.arena.get(current).link(&self.direction);
        Some(current)
    }
}

/// Read-only cursor into the node graph.
///
/// This is all the structure exposes of its nodes: callers can walk the
/// levels and inspect keys, but never relink anything.
pub struct NodeRef<'a, V> {
    arena: &'a NodeArena<V>,
    id: NodeId,
}

impl<'a, V> Clone for NodeRef<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> Copy for NodeRef<'a, V> {}

impl<'a, V> NodeRef<'a, V> {
    pub(crate) fn new(arena: &'a NodeArena<V>, id: NodeId) -> NodeRef<'a, V> {
        NodeRef { arena, id }
    }

    fn node(&self) -> &'a SkipNode<V> {
        self.arena.get(self.id)
    }

    fn follow(&self, direction: Direction) -> Option<NodeRef<'a, V>> {
        self.node().link(&direction).map(|id| NodeRef::new(self.arena, id))
    }

    pub fn key(&self) -> &'a SkipKey {
        &self.node().key
    }

    pub fn value(&self) -> Option<&'a V> {
        self.node().value.as_ref()
    }

    pub fn next(&self) -> Option<NodeRef<'a, V>> {
        self.follow(Direction::Next)
    }

    pub fn prev(&self) -> Option<NodeRef<'a, V>> {
        self.follow(Direction::Prev)
    }

    pub fn below(&self) -> Option<NodeRef<'a, V>> {
        self.follow(Direction::Below)
    }

    pub fn above(&self) -> Option<NodeRef<'a, V>> {
        self.follow(Direction::Above)
    }

    // level 0 node of this node's tower
    pub fn bottom(&self) -> NodeRef<'a, V> {
        let mut cur = *self;
        while let Some(below) = cur.below() {
            cur = below;
        }
        cur
    }
}
