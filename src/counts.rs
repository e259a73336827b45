use crate::models::{Category, SignatureCounts, StoredSignature};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Classify the whole signature list. Records whose category does not parse
/// are left out of every bucket, including `total`.
pub fn tally(signatures: &[StoredSignature]) -> SignatureCounts {
    let mut counts = SignatureCounts::default();
    for signature in signatures {
        match Category::parse(&signature.category) {
            Some(Category::Student) => counts.students += 1,
            Some(Category::Alumni) => counts.alumni += 1,
            Some(Category::Public) => counts.general += 1,
            None => continue,
        }
        counts.total += 1;
    }
    counts
}

/// Two-source reconciliation: the remote ledger is authoritative when it
/// answered, otherwise the local cache is scanned. Weak consistency by
/// design; the two stores may diverge after swallowed remote failures.
pub fn resolve(remote: Option<SignatureCounts>, local: &[StoredSignature]) -> SignatureCounts {
    remote.unwrap_or_else(|| tally(local))
}

/// In-process visitor tally used when the remote ledger is unreachable.
/// Explicitly owned, injected through `AppState`; resets with the process.
#[derive(Debug, Clone, Default)]
pub struct VisitorTally(Arc<AtomicU64>);

impl VisitorTally {
    pub fn record(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signature(category: &str) -> StoredSignature {
        StoredSignature {
            id: "0".into(),
            name: "Amit Patel".into(),
            email: "amit@example.com".into(),
            category: category.into(),
            timestamp: "November 26, 2025 at 10:00:00 AM".into(),
        }
    }

    #[test]
    fn tally_sums_recognized_categories() {
        let records = vec![
            signature("student"),
            signature("Student"),
            signature(" alumni "),
            signature("public"),
        ];
        let counts = tally(&records);
        assert_eq!(counts.students, 2);
        assert_eq!(counts.alumni, 1);
        assert_eq!(counts.general, 1);
        assert_eq!(counts.total, counts.students + counts.alumni + counts.general);
    }

    #[test]
    fn tally_excludes_unrecognized_from_every_bucket() {
        let records = vec![signature("student"), signature("faculty"), signature("")];
        let counts = tally(&records);
        assert_eq!(counts.students, 1);
        assert_eq!(counts.total, 1);
    }

    #[test]
    fn tally_is_idempotent() {
        let records = vec![signature("alumni"), signature("public")];
        assert_eq!(tally(&records), tally(&records));
    }

    #[test]
    fn resolve_prefers_remote() {
        let remote = SignatureCounts {
            students: 40,
            alumni: 10,
            general: 5,
            total: 55,
        };
        let local = vec![signature("student")];
        assert_eq!(resolve(Some(remote), &local), remote);
    }

    #[test]
    fn resolve_falls_back_to_local_scan() {
        let local = vec![signature("student"), signature("student")];
        let counts = resolve(None, &local);
        assert_eq!(counts.students, 2);
        assert_eq!(counts.total, 2);
    }

    #[test]
    fn visitor_tally_counts_per_process() {
        let tally = VisitorTally::default();
        assert_eq!(tally.current(), 0);
        assert_eq!(tally.record(), 1);
        assert_eq!(tally.record(), 2);
        assert_eq!(tally.current(), 2);
    }
}
