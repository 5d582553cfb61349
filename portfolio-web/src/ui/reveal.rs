use std::collections::HashSet;

/// Tracks which observed elements have been revealed. Reveal is permanent:
/// leaving the viewport again changes nothing.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    /// Returns `true` when the element should receive the reveal class now.
    pub fn on_intersection(&mut self, element: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(element)
    }

    pub fn is_revealed(&self, element: usize) -> bool {
        self.revealed.contains(&element)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_reveals_once() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.on_intersection(0, false));
        assert!(tracker.on_intersection(0, true));
        assert!(!tracker.on_intersection(0, true));
        assert!(tracker.is_revealed(0));
    }

    #[test]
    fn leaving_the_viewport_does_not_unreveal() {
        let mut tracker = RevealTracker::default();
        tracker.on_intersection(3, true);
        tracker.on_intersection(3, false);
        assert!(tracker.is_revealed(3));
        assert!(!tracker.is_revealed(4));
        assert_eq!(tracker.revealed_count(), 1);
    }
}
