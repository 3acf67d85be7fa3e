use crate::bank::QuipEntry;

/// Virtual slot count for one entry: weight 0.1 -> 1 slot, 1.0 -> 10,
/// 2.0 -> 20. Never zero, so every entry stays reachable.
fn slot_count(weight: f64) -> u64 {
    ((weight * 10.0).round() as u64).max(1)
}

/// Deterministic weighted pick: index into the virtual slot expansion with
/// `hash mod total_slots`, walking cumulatively instead of materializing
/// the expanded list. Pool must be non-empty.
pub fn weighted_pick<'a>(pool: &[&'a QuipEntry], hash: u32) -> &'a QuipEntry {
    debug_assert!(!pool.is_empty(), "weighted_pick requires a non-empty pool");

    let total: u64 = pool.iter().map(|entry| slot_count(entry.weight)).sum();
    let mut index = u64::from(hash) % total;

    for entry in pool {
        let slots = slot_count(entry.weight);
        if index < slots {
            return entry;
        }
        index -= slots;
    }

    // index < total and the slot counts sum to total, so the loop always
    // returns; this satisfies the type checker.
    pool[pool.len() - 1]
}
