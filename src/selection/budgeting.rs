use crate::menu::MenuRecord;
use crate::selection::random::RandomSource;
use crate::types::selection_result::RandomSelectionResult;

/// Randomly fill `budget` from `candidates`.
///
/// Each round draws uniformly among the pool entries that still fit the
/// remaining budget, until nothing fits or the pool is exhausted. This is a
/// greedy fill, not an optimal packing: two calls with the same inputs will
/// usually differ, and `remaining` is not minimized.
///
/// With `allow_duplicates` a drawn record stays in the pool. Free records are
/// the exception: they leave the pool after one draw, since drawing them again
/// would never move `total` forward.
pub fn select_random<R: RandomSource>(
    candidates: &[MenuRecord],
    budget: u32,
    allow_duplicates: bool,
    rng: &mut R,
) -> RandomSelectionResult {
    if !candidates.iter().any(|record| record.price <= budget) {
        return RandomSelectionResult::empty(budget);
    }

    let mut pool: Vec<&MenuRecord> = candidates.iter().collect();
    let mut items = Vec::new();
    let mut total: u32 = 0;

    loop {
        let slack = budget - total;
        let affordable: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, record)| record.price <= slack)
            .map(|(idx, _)| idx)
            .collect();

        if affordable.is_empty() {
            break;
        }

        let drawn = rng.pick(affordable.len());
        // Out-of-range picks wrap around.
        let pool_idx = affordable[drawn % affordable.len()];

        let record = if !allow_duplicates || pool[pool_idx].is_free() {
            pool.remove(pool_idx)
        } else {
            pool[pool_idx]
        };

        total += record.price;
        items.push(record.clone());
    }

    debug_assert!(total <= budget);
    debug_assert_eq!(
        total,
        items.iter().map(|record| record.price).sum::<u32>()
    );

    RandomSelectionResult {
        items,
        total,
        remaining: budget - total,
    }
}
