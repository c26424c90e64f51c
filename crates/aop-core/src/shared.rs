//! Thread-shareable planner handle

use crate::planner::Planner;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle serializing all access to one [`Planner`]
///
/// Every closure runs with the lock held for its whole duration, so
/// concurrent votes on one feature are never lost.
#[derive(Debug, Clone, Default)]
pub struct SharedPlanner {
    inner: Arc<Mutex<Planner>>,
}

impl SharedPlanner {
    /// Wrap a planner
    #[inline]
    #[must_use]
    pub fn new(planner: Planner) -> Self {
        Self {
            inner: Arc::new(Mutex::new(planner)),
        }
    }

    /// Run a read-only operation under the lock
    pub fn read<R>(&self, f: impl FnOnce(&Planner) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Run a mutating operation under the lock
    pub fn write<R>(&self, f: impl FnOnce(&mut Planner) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Number of handles sharing this planner
    #[inline]
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aop_model::{BusinessUnit, FeatureDraft, Half, Quarter, Status};
    use aop_voting::VoteDecision;
    use std::thread;

    #[test]
    fn concurrent_votes_are_all_counted() {
        let shared = SharedPlanner::default();
        let id = shared
            .write(|p| {
                p.create(&FeatureDraft::new(
                    "Partner API",
                    "Public API for partners",
                    BusinessUnit::Platform,
                    2027,
                    Half::H1,
                    Quarter::Q2,
                ))
                .map(|f| f.id())
            })
            .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let decision = if i % 2 == 0 {
                        VoteDecision::Approve
                    } else {
                        VoteDecision::Reject
                    };
                    shared
                        .write(|p| p.cast_vote(id, &format!("Voter {i}"), decision))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let tally = shared.read(|p| p.tally(id)).unwrap();
        assert_eq!((tally.approve, tally.reject), (4, 4));
        assert_eq!(shared.read(|p| p.get(id).map(|f| f.status())).unwrap(), Status::Rejected);
        assert_eq!(shared.handle_count(), 1);
    }
}
