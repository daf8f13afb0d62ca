use std::collections::BTreeMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

#[derive(Debug, Clone)]
pub struct InFlight {
    pub endpoint: String,
    pub started: Instant,
}

/// Registry of requests that have been issued but not yet resolved.
///
/// Every request owns its own entry, so "loading" is simply a non-empty
/// registry and overlapping requests never clear each other.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    next_id: u64,
    in_flight: BTreeMap<RequestId, InFlight>,
    completed: u64,
}

impl RequestTracker {
    pub fn begin(&mut self, endpoint: &str) -> RequestId {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        self.in_flight.insert(
            id,
            InFlight {
                endpoint: endpoint.to_string(),
                started: Instant::now(),
            },
        );
        id
    }

    /// Removes `id`, returning how long it was outstanding.
    pub fn finish(&mut self, id: RequestId) -> Option<Duration> {
        let entry = self.in_flight.remove(&id)?;
        self.completed += 1;
        Some(entry.started.elapsed())
    }

    pub fn outstanding(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub const fn completed(&self) -> u64 {
        self.completed
    }

    /// Endpoints still in flight, oldest first.
    pub fn pending_endpoints(&self) -> Vec<&str> {
        self.in_flight
            .values()
            .map(|entry| entry.endpoint.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_requests_keep_loading_until_all_finish() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin("/countries");
        let second = tracker.begin("/summary");
        assert_eq!(tracker.outstanding(), 2);

        assert!(tracker.finish(first).is_some());
        assert!(tracker.is_loading());
        assert_eq!(tracker.pending_endpoints(), vec!["/summary"]);

        assert!(tracker.finish(second).is_some());
        assert!(!tracker.is_loading());
        assert_eq!(tracker.completed(), 2);
    }

    #[test]
    fn finishing_twice_is_a_no_op() {
        let mut tracker = RequestTracker::default();
        let id = tracker.begin("/countries");
        assert!(tracker.finish(id).is_some());
        assert!(tracker.finish(id).is_none());
        assert_eq!(tracker.completed(), 1);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut tracker = RequestTracker::default();
        let a = tracker.begin("/a");
        tracker.finish(a);
        let b = tracker.begin("/b");
        assert_ne!(a, b);
    }
}
