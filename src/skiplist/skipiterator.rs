use crate::skiplist::skipkey::SkipKey;
use crate::skiplist::skipnode::NodeRef;

/// Ascending `(key, value)` pairs, read off level 0.
pub struct SkipIterator<'a, V> {
    // last node yielded, starting at the -oo sentinel
    cursor: Option<NodeRef<'a, V>>,
}

impl<'a, V> SkipIterator<'a, V> {
    pub(crate) fn new(bottom_head: NodeRef<'a, V>) -> SkipIterator<'a, V> {
        SkipIterator { cursor: Some(bottom_head) }
    }
}

impl<'a, V> Iterator for SkipIterator<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.cursor?.next()?;
        self.cursor = Some(next);

        match (next.key(), next.value()) {
            (SkipKey::Value(key), Some(value)) => Some((key.as_ref(), value)),
            _ => {
                // reached +oo
                self.cursor = None;
                None
            }
        }
    }
}

pub struct SkipKeys<'a, V> {
    inner: SkipIterator<'a, V>,
}

impl<'a, V> SkipKeys<'a, V> {
    pub(crate) fn new(inner: SkipIterator<'a, V>) -> SkipKeys<'a, V> {
        SkipKeys { inner }
    }
}

impl<'a, V> Iterator for SkipKeys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}
