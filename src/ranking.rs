use serde::Serialize;
use std::cmp::Ordering;

/// Number of trips picked up in one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneCount {
    pub zone: String,
    pub count: u64,
}

/// Number of trips picked up in one zone during one hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCount {
    pub zone: String,
    pub hour: u8,
    pub count: u64,
}

impl ZoneCount {
    /// Busiest first, then by zone name.
    pub fn rank(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.zone.cmp(&other.zone))
    }
}

impl SlotCount {
    /// Busiest first, then by zone name, then by hour.
    pub fn rank(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.zone.cmp(&other.zone))
            .then_with(|| self.hour.cmp(&other.hour))
    }
}

/// Keep the `k` smallest entries under `cmp`, sorted. Only the retained
/// entries are fully sorted; the rest are discarded after a linear-time
/// selection.
pub fn top_k<T, F>(mut entries: Vec<T>, k: usize, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if k == 0 {
        return Vec::new();
    }
    if entries.len() > k {
        entries.select_nth_unstable_by(k - 1, &mut cmp);
        entries.truncate(k);
    }
    entries.sort_unstable_by(cmp);
    entries
}
