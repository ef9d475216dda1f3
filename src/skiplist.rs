use std::fmt;
use std::sync::Arc;

use log::{debug, log_enabled, trace, Level};

use crate::errors::{Error, Result};
use crate::opts::SkipListOptions;
use crate::printer;
use crate::skiplist::arena::{NodeArena, NodeId};
use crate::skiplist::skipnode::{Direction, SkipNode, SkipNodeIterator};

pub use crate::skiplist::coinflipper::{CoinFlipper, CoinFlipperRand, CoinFlipperScripted};
pub use crate::skiplist::skipiterator::{SkipIterator, SkipKeys};
pub use crate::skiplist::skipkey::SkipKey;
pub use crate::skiplist::skipnode::NodeRef;

mod arena;
mod coinflipper;
mod skipkey;
mod skipnode;
mod skipiterator;

/// Ordered map from string keys to `V`, built as a four-way linked skiplist.
///
/// Every level is a doubly linked list bounded by `-oo`/`+oo` sentinels, and
/// every key is a vertical tower of nodes starting at level 0. Only the level
/// 0 node of a tower holds the value.
///
/// Tower heights come from a fair coin. Unless
/// [`SkipListOptions::max_height`] is set there is no cap: height is
/// `O(log n)` in expectation, and taller structures are exponentially
/// unlikely but possible.
///
/// Not thread-safe: `put` and `remove` relink several nodes in sequence, so
/// mutations need external exclusion.
pub struct SkipList<V> {
    size: usize,
    // levels above level 0
    height: usize,
    // sentinels of the top level
    head: NodeId,
    tail: NodeId,
    arena: NodeArena<V>,
    coin_flipper: Box<dyn CoinFlipper>,
    opts: SkipListOptions,
}

impl<V> SkipList<V> {
    pub fn new() -> Self {
        Self::with_options(SkipListOptions::default())
    }

    pub fn with_options(opts: SkipListOptions) -> Self {
        let coin_flipper = match opts.seed {
            Some(seed) => CoinFlipperRand::seeded(seed),
            None => CoinFlipperRand::new(),
        };
        Self::with_coin_flipper(opts, Box::new(coin_flipper))
    }

    pub fn with_coin_flipper(opts: SkipListOptions, coin_flipper: Box<dyn CoinFlipper>) -> Self {
        let mut arena = NodeArena::new();
        let (head, tail) = Self::sentinel_pair(&mut arena);
        return SkipList {
            size: 0,
            height: 0,
            head,
            tail,
            arena,
            coin_flipper,
            opts,
        };
    }

    fn sentinel_pair(arena: &mut NodeArena<V>) -> (NodeId, NodeId) {
        let head = arena.alloc(SkipNode::new(SkipKey::NegInf, None));
        let tail = arena.alloc(SkipNode::new(SkipKey::PosInf, None));
        arena.get_mut(head).next = Some(tail);
        arena.get_mut(tail).prev = Some(head);
        (head, tail)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    // levels above level 0
    pub fn height(&self) -> usize {
        self.height
    }

    /// Leftmost sentinel of the top level, the entry point for read-only walks.
    pub fn head(&self) -> NodeRef<'_, V> {
        NodeRef::new(&self.arena, self.head)
    }

    fn node(&self, id: NodeId) -> &SkipNode<V> {
        self.arena.get(id)
    }

    fn node_mut(&mut self, id: NodeId) -> &mut SkipNode<V> {
        self.arena.get_mut(id)
    }

    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::InvalidKey("key must not be empty".to_string()));
        }
        Ok(())
    }

    //  -oo -> 10 -> 20 -> 30 -> 40 -> +oo, target = 34 stops at 30.
    // Always ends on level 0, at the last node whose key is <= target.
    fn find(&self, target: &str) -> NodeId {
        let mut cur = self.head;

        loop {
            while let Some(next) = self.node(cur).next {
                let key = &self.node(next).key;
                if *key == SkipKey::PosInf || key.cmp_str(target).is_gt() {
                    break;
                }
                cur = next;
            }

            match self.node(cur).below {
                Some(below) => cur = below,
                None => break,
            }
        }

        cur
    }

    fn find_exact(&self, key: &str) -> Option<NodeId> {
        let found = self.find(key);
        if self.node(found).key.matches(key) {
            Some(found)
        } else {
            None
        }
    }

    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        Self::validate_key(key)?;
        Ok(self.find_exact(key).and_then(|found| self.node(found).value.as_ref()))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<Option<&mut V>> {
        Self::validate_key(key)?;
        Ok(match self.find_exact(key) {
            Some(found) => self.node_mut(found).value.as_mut(),
            None => None,
        })
    }

    pub fn contains_key(&self, key: &str) -> Result<bool> {
        Self::validate_key(key)?;
        Ok(self.find_exact(key).is_some())
    }

    // splices a new node between `after` and its right neighbour
    fn insert_after(&mut self, after: NodeId, key: SkipKey, value: Option<V>) -> NodeId {
        let link = self.arena.alloc(SkipNode::new(key, value));
        let next = self.node(after).next;

        self.node_mut(link).prev = Some(after);
        self.node_mut(link).next = next;
        if let Some(next) = next {
            self.node_mut(next).prev = Some(link);
        }
        self.node_mut(after).next = Some(link);
        link
    }

    // overwriting never changes the shape of the structure
    pub fn put<K: Into<Arc<str>>>(&mut self, key: K, value: V) -> Result<Option<V>> {
        let key: Arc<str> = key.into();
        Self::validate_key(&key)?;

        let mut cur = self.find(&key);
        if self.node(cur).key.matches(&key) {
            return Ok(self.node_mut(cur).value.replace(value));
        }

        let mut inserted = self.insert_after(cur, SkipKey::Value(key.clone()), Some(value));
        self.size += 1;

        let mut level = 0;
        while self.opts.allows_level(level) && self.coin_flipper.flip() {
            if level >= self.height {
                self.create_new_level();
            }

            cur = self.nearest_above(cur)?;
            let raised = self.insert_after(cur, SkipKey::Value(key.clone()), None);
            self.node_mut(raised).below = Some(inserted);
            self.node_mut(inserted).above = Some(raised);
            inserted = raised;

            level += 1;
            trace!("tower of {:?} raised to level {}", key, level);
        }

        self.after_mutation("put", &key);
        Ok(None)
    }

    // walks left from `from` to the first node with a node above it, then steps up
    fn nearest_above(&self, from: NodeId) -> Result<NodeId> {
        let mut cur = from;
        loop {
            let node = self.node(cur);
            if let Some(above) = node.above {
                return Ok(above);
            }
            match node.prev {
                Some(prev) => cur = prev,
                None => {
                    return Err(Error::IllegalState(
                        format!("no level above {} while raising a tower", node.key)));
                }
            }
        }
    }

    // puts a fresh sentinel-only level on top
    fn create_new_level(&mut self) {
        let (head, tail) = Self::sentinel_pair(&mut self.arena);
        let (old_head, old_tail) = (self.head, self.tail);

        self.node_mut(head).below = Some(old_head);
        self.node_mut(tail).below = Some(old_tail);
        self.node_mut(old_head).above = Some(head);
        self.node_mut(old_tail).above = Some(tail);

        self.head = head;
        self.tail = tail;
        self.height += 1;
        debug!("skiplist height grown to {}", self.height);
    }

    // drops the top level, which must hold sentinels only
    fn remove_top_level(&mut self) -> Result<()> {
        let (old_head, old_tail) = (self.head, self.tail);
        let (head, tail) = match (self.node(old_head).below, self.node(old_tail).below) {
            (Some(head), Some(tail)) => (head, tail),
            _ => return Err(Error::IllegalState("no level below the top level".to_string())),
        };

        self.arena.release(old_head);
        self.arena.release(old_tail);
        self.node_mut(head).above = None;
        self.node_mut(tail).above = None;

        self.head = head;
        self.tail = tail;
        self.height -= 1;
        debug!("skiplist height trimmed to {}", self.height);
        Ok(())
    }

    fn unlink(&mut self, id: NodeId) {
        let node = self.node(id);
        let (prev, next) = (node.prev, node.next);

        if let Some(prev) = prev {
            self.node_mut(prev).next = next;
        }
        if let Some(next) = next {
            self.node_mut(next).prev = prev;
        }
        let node = self.node_mut(id);
        node.next = None;
        node.prev = None;
    }

    /// Removes `key`, returning its value. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Result<Option<V>> {
        Self::validate_key(key)?;

        let found = match self.find_exact(key) {
            Some(found) => found,
            None => return Ok(None),
        };

        // bottom-up: take every tower node out of its level
        let tower: Vec<NodeId> = SkipNodeIterator::new(&self.arena, found, Direction::Above).collect();
        for &id in &tower {
            self.unlink(id);
        }

        // top-down: detach the tower vertically and free it
        let mut value = None;
        for &id in tower.iter().rev() {
            let node = self.arena.release(id);
            if let Some(below) = node.below {
                self.node_mut(below).above = None;
            }
            if node.value.is_some() {
                value = node.value;
            }
        }

        self.size -= 1;

        // one removal can empty several top levels at once
        while self.height > 0 && self.node(self.head).next == Some(self.tail) {
            self.remove_top_level()?;
        }

        self.after_mutation("remove", key);
        Ok(value)
    }

    // remove, reporting whether the key was present
    pub fn erase(&mut self, key: &str) -> Result<bool> {
        Ok(self.remove(key)?.is_some())
    }

    // back to the two sentinels of an empty level 0
    pub fn clear(&mut self) {
        self.arena.clear();
        let (head, tail) = Self::sentinel_pair(&mut self.arena);
        self.head = head;
        self.tail = tail;
        self.size = 0;
        self.height = 0;
    }

    pub fn iter(&self) -> SkipIterator<'_, V> {
        SkipIterator::new(self.bottom_head())
    }

    pub fn keys(&self) -> SkipKeys<'_, V> {
        SkipKeys::new(self.iter())
    }

    fn bottom_head(&self) -> NodeRef<'_, V> {
        self.head().bottom()
    }

    fn after_mutation(&self, op: &str, key: &str) {
        if self.opts.verify_invariants {
            if let Err(err) = self.check_state() {
                panic!("skiplist corrupted after {} of {:?}: {}", op, key, err);
            }
        }
        if log_enabled!(Level::Trace) {
            trace!("after {} of {:?}:\n{}", op, key, printer::render_horizontal(self));
        }
    }

    /// Verifies the full structure: level ordering, sentinels, link symmetry,
    /// tower containment, value placement and the size/height counters.
    pub fn check_state(&self) -> Result<()> {
        let illegal = |msg: String| Err(Error::IllegalState(msg));

        let head = self.node(self.head);
        let tail = self.node(self.tail);
        if head.above.is_some() || head.prev.is_some() {
            return illegal("head has a node above or before it".to_string());
        }
        if tail.above.is_some() || tail.next.is_some() {
            return illegal("tail has a node above or after it".to_string());
        }

        let mut reachable = 0;
        let mut level = self.height;
        let mut level_head = Some(self.head);
        let mut level_tail = Some(self.tail);

        while let (Some(lh), Some(lt)) = (level_head, level_tail) {
            let mut count = 0;
            let mut prev: Option<NodeId> = None;

            for id in SkipNodeIterator::new(&self.arena, lh, Direction::Next) {
                let node = self.node(id);
                count += 1;

                if node.prev != prev {
                    return illegal(format!("broken prev link at {} on level {}", node.key, level));
                }
                if let Some(p) = prev {
                    if self.node(p).key >= node.key {
                        return illegal(format!("{} out of order on level {}", node.key, level));
                    }
                }

                match node.below {
                    Some(below) => {
                        let below = self.node(below);
                        if below.key != node.key || below.above != Some(id) {
                            return illegal(format!("broken tower at {} on level {}", node.key, level));
                        }
                    }
                    None if level > 0 => {
                        return illegal(format!("{} on level {} has nothing below", node.key, level));
                    }
                    None => {}
                }

                let holds_value = node.value.is_some();
                let should_hold = level == 0 && !node.key.is_sentinel();
                if holds_value != should_hold {
                    return illegal(format!("misplaced value at {} on level {}", node.key, level));
                }
                prev = Some(id);
            }

            if self.node(lh).key != SkipKey::NegInf || prev != Some(lt) || self.node(lt).key != SkipKey::PosInf {
                return illegal(format!("level {} is not bounded by sentinels", level));
            }
            if level == self.height && level > 0 && count == 2 {
                return illegal(format!("top level {} holds sentinels only", level));
            }
            if level == 0 && count - 2 != self.size {
                return illegal(format!("size is {} but level 0 holds {} keys", self.size, count - 2));
            }

            reachable += count;
            level_head = self.node(lh).below;
            level_tail = self.node(lt).below;
            if level_head.is_some() != level_tail.is_some() {
                return illegal(format!("sentinels of level {} disagree on the level below", level));
            }
            if level_head.is_some() {
                if level == 0 {
                    return illegal("levels below level 0".to_string());
                }
                level -= 1;
            }
        }

        if level != 0 {
            return illegal(format!("height is {} but level 0 was reached {} levels early", self.height, level));
        }
        if reachable != self.arena.len() {
            return illegal(format!("{} nodes allocated, {} reachable", self.arena.len(), reachable));
        }
        Ok(())
    }
}

impl<V> Default for SkipList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a SkipList<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = SkipIterator<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> fmt::Display for SkipList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", printer::render_horizontal(self))
    }
}

impl<V: fmt::Debug> fmt::Debug for SkipList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
