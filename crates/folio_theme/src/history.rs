//! Linear undo/redo log
//!
//! Snapshots live in a vector with a cursor pointing at the active entry.
//! Recording a new snapshot drops everything after the cursor, so redo is only
//! possible until the next fresh edit.

/// Snapshot log with a cursor. Never empty.
#[derive(Clone, Debug)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: usize,
    limit: Option<usize>,
}

impl<T: Clone> History<T> {
    /// Single-entry log holding `initial`
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            limit: None,
        }
    }

    /// Keep at most `limit` entries, discarding the oldest first.
    ///
    /// A limit of zero is treated as one; the active entry is always kept.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.map(|l| l.max(1));
        self.enforce_limit();
        self
    }

    /// The active snapshot
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// History always holds at least the initial entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Truncate after the cursor, append `snapshot` and make it active
    pub fn record(&mut self, snapshot: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
        self.enforce_limit();
    }

    /// Step back one entry. Returns the new active snapshot, or `None` at the start.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward one entry. Returns the new active snapshot, or `None` at the end.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Drop every entry and start over from `initial`
    pub fn reset(&mut self, initial: T) {
        self.entries.clear();
        self.entries.push(initial);
        self.cursor = 0;
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.entries.len() > limit {
            let excess = self.entries.len() - limit;
            // Drop from the front but never past the cursor.
            let excess = excess.min(self.cursor);
            self.entries.drain(..excess);
            self.cursor -= excess;
            // Anything still over the limit lies in the redo tail.
            self.entries.truncate(limit.max(self.cursor + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn undo_redo_and_truncate_on_diverge() {
        let mut history = History::new(0);
        history.record(1);
        history.record(2);
        history.record(3);

        assert_eq!(history.undo(), Some(&2));
        assert_eq!(history.undo(), Some(&1));
        assert_eq!(history.redo(), Some(&2));

        history.record(4);
        assert_eq!(history.entries(), &[0, 1, 2, 4]);
        assert_eq!(history.redo(), None);
        assert_eq!(*history.current(), 4);
    }

    #[test]
    fn bounds_are_no_ops() {
        let mut history = History::new("a");
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert_eq!(history.cursor(), 0);
        assert_eq!(*history.current(), "a");
    }

    #[test]
    fn reset_collapses_to_one_entry() {
        let mut history = History::new(0);
        history.record(1);
        history.record(2);
        history.reset(9);

        assert_eq!(history.entries(), &[9]);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn limit_drops_oldest() {
        let mut history = History::new(0).with_limit(Some(3));
        for i in 1..=5 {
            history.record(i);
        }
        assert_eq!(history.entries(), &[3, 4, 5]);
        assert_eq!(history.cursor(), 2);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Record(u8),
        Undo,
        Redo,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::Record),
            Just(Op::Undo),
            Just(Op::Redo),
        ]
    }

    proptest! {
        #[test]
        fn cursor_always_valid(ops in prop::collection::vec(op(), 0..64), limit in prop::option::of(1usize..8)) {
            let mut history = History::new(0u8).with_limit(limit);
            for op in ops {
                match op {
                    Op::Record(v) => {
                        history.record(v);
                        prop_assert_eq!(*history.current(), v);
                        prop_assert!(!history.can_redo());
                    }
                    Op::Undo => { history.undo(); }
                    Op::Redo => { history.redo(); }
                }
                prop_assert!(history.cursor() < history.len());
                if let Some(limit) = limit {
                    prop_assert!(history.len() <= limit);
                }
            }
        }
    }
}
