// src/crawl/frontier.rs
// =============================================================================
// The work queue of links still to be processed.
//
// How it works:
// - A VecDeque holds links in the order they were discovered (FIFO)
// - A HashSet remembers every link ever pushed, so nothing is queued twice
// - Popping a link does NOT remove it from the seen set
//
// That means `seen_count()` at the end of a run equals the number of distinct
// links processed, and the walk is breadth-first in discovery order.
// =============================================================================

use std::collections::{HashSet, VecDeque};

#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<String>,
    seen: HashSet<String>,
}

impl Frontier {
    /// Queues `link` unless it was seen before. Returns true when queued.
    pub fn push(&mut self, link: String) -> bool {
        if self.seen.contains(&link) {
            return false;
        }
        self.seen.insert(link.clone());
        self.queue.push_back(link);
        true
    }

    /// Next link to process, oldest first.
    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Number of distinct links ever queued.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why keep `seen` separate from `queue`?
//    - The queue shrinks as links are processed; `seen` only ever grows
//    - Checking `seen` is O(1), scanning the queue would be O(n)
//
// 2. Why push a clone into both?
//    - HashSet and VecDeque each own their Strings
//    - One clone per distinct link is cheap next to reading a file or
//      making an HTTP request
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::default();
        frontier.push("a".to_string());
        frontier.push("b".to_string());
        frontier.push("c".to_string());

        assert_eq!(frontier.pop().as_deref(), Some("a"));
        assert_eq!(frontier.pop().as_deref(), Some("b"));
        assert_eq!(frontier.pop().as_deref(), Some("c"));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_duplicates_suppressed_even_after_pop() {
        let mut frontier = Frontier::default();
        assert!(frontier.push("a".to_string()));
        assert!(!frontier.push("a".to_string()));

        frontier.pop();
        assert!(!frontier.push("a".to_string()));
        assert_eq!(frontier.pop(), None);
        assert_eq!(frontier.seen_count(), 1);
    }

    #[test]
    fn test_growing_while_draining() {
        let mut frontier = Frontier::default();
        frontier.push("start".to_string());

        let mut visited = Vec::new();
        while let Some(link) = frontier.pop() {
            if link == "start" {
                frontier.push("x".to_string());
                frontier.push("y".to_string());
            }
            if link == "x" {
                frontier.push("start".to_string());
                frontier.push("z".to_string());
            }
            visited.push(link);
        }

        assert_eq!(visited, vec!["start", "x", "y", "z"]);
        assert_eq!(frontier.seen_count(), visited.len());
    }
}
