//! Input latching
//!
//! The UI layer writes, the tick reads. Two shapes cover every game:
//! a latch of currently-held keys (sampled, never pushed) and a queue of
//! discrete one-shot intents drained exactly once per tick.

use std::collections::HashSet;
use std::hash::Hash;

/// Most-recent held state per key symbol.
///
/// `press`/`release` are called from key event handlers; the tick samples
/// `is_held` and never observes individual events.
#[derive(Debug, Clone, Default)]
pub struct KeyLatch<K: Eq + Hash + Copy> {
    held: HashSet<K>,
}

impl<K: Eq + Hash + Copy> KeyLatch<K> {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
        }
    }

    pub fn press(&mut self, key: K) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: K) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: K) -> bool {
        self.held.contains(&key)
    }

    /// Drop all held state (on focus loss or session restart).
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// A queue of typed one-shot intents.
///
/// The UI pushes intents (button clicks, answer selections); the tick driver
/// drains and dispatches them through a single match, so every state mutation
/// goes through the same path.
#[derive(Debug, Clone)]
pub struct IntentQueue<I> {
    pending: Vec<I>,
}

impl<I> IntentQueue<I> {
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, intent: I) {
        self.pending.push(intent);
    }

    /// Drain all pending intents in arrival order, clearing the queue.
    pub fn drain(&mut self) -> Vec<I> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl<I> Default for IntentQueue<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_tracks_held_keys() {
        let mut latch = KeyLatch::new();
        latch.press('a');
        assert!(latch.is_held('a'));
        latch.release('a');
        assert!(!latch.is_held('a'));
    }

    #[test]
    fn latch_press_is_idempotent() {
        let mut latch = KeyLatch::new();
        latch.press(32u32);
        latch.press(32u32);
        assert!(latch.is_held(32));
        latch.release(32);
        assert!(!latch.is_held(32));
    }

    #[test]
    fn queue_push_and_drain() {
        let mut q = IntentQueue::new();
        q.push(1);
        q.push(2);
        assert_eq!(q.len(), 2);
        let drained = q.drain();
        assert_eq!(drained, vec![1, 2]);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_on_empty_is_empty() {
        let mut q: IntentQueue<u8> = IntentQueue::new();
        assert!(q.drain().is_empty());
    }
}
