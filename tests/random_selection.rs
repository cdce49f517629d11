use std::collections::HashSet;

use menu_core::menu::MenuRecord;
use menu_core::selection::{
    select_random, ComboSelector, FilterSpec, RandomSource, SeededRandom, ThreadRandom,
};
use menu_core::types::RandomOptions;

fn make_menu(id: u32, price: u32) -> MenuRecord {
    MenuRecord::new(id, format!("menu {id}"), price, "main", "food")
}

/// Replays a fixed list of picks (cycling) and records the `len` of every draw.
struct ScriptedRandom {
    picks: Vec<usize>,
    pos: usize,
    lens: Vec<usize>,
}

impl ScriptedRandom {
    fn new(picks: Vec<usize>) -> Self {
        Self {
            picks,
            pos: 0,
            lens: Vec::new(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        let value = self.picks[self.pos % self.picks.len()];
        self.pos += 1;
        self.lens.push(len);
        value
    }
}

fn ids(result: &[MenuRecord]) -> Vec<u32> {
    result.iter().map(|m| m.id.get()).collect()
}

#[test]
fn test_empty_candidates_return_whole_budget() {
    let mut rng = ScriptedRandom::new(vec![0]);
    let result = select_random(&[], 1000, true, &mut rng);

    assert!(result.is_empty());
    assert_eq!(result.total, 0);
    assert_eq!(result.remaining, 1000);
    assert!(rng.lens.is_empty(), "no draw should happen");
}

#[test]
fn test_all_candidates_over_budget_terminates_empty() {
    let candidates = vec![make_menu(1, 600), make_menu(2, 800)];

    for allow_duplicates in [true, false] {
        let mut rng = ScriptedRandom::new(vec![0]);
        let result = select_random(&candidates, 500, allow_duplicates, &mut rng);

        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.remaining, 500);
    }
}

#[test]
fn test_single_item_priced_exactly_at_budget() {
    let candidates = vec![make_menu(1, 1000)];
    let mut rng = ThreadRandom;

    let result = select_random(&candidates, 1000, false, &mut rng);

    assert_eq!(ids(&result.items), vec![1]);
    assert_eq!(result.total, 1000);
    assert_eq!(result.remaining, 0);

    let result = select_random(&candidates, 1000, true, &mut rng);
    assert_eq!(ids(&result.items), vec![1]);
    assert_eq!(result.remaining, 0);
}

#[test]
fn test_zero_budget_without_free_items_is_empty() {
    let candidates = vec![make_menu(1, 100), make_menu(2, 1)];
    let mut rng = ThreadRandom;

    let result = select_random(&candidates, 0, true, &mut rng);

    assert!(result.items.is_empty());
    assert_eq!(result.total, 0);
    assert_eq!(result.remaining, 0);
}

#[test]
fn test_scripted_draws_without_duplicates() {
    let candidates = vec![make_menu(1, 100), make_menu(2, 200), make_menu(3, 300)];
    let mut rng = ScriptedRandom::new(vec![1, 0]);

    let result = select_random(&candidates, 500, false, &mut rng);

    // Draw 1 among [1, 2, 3] -> 2. Draw 2 among [1, 3] -> 1. Then 3 no longer fits.
    assert_eq!(ids(&result.items), vec![2, 1]);
    assert_eq!(result.total, 300);
    assert_eq!(result.remaining, 200);
    assert_eq!(rng.lens, vec![3, 2]);
}

#[test]
fn test_scripted_draws_with_duplicates() {
    let candidates = vec![make_menu(1, 100), make_menu(2, 250)];
    let mut rng = ScriptedRandom::new(vec![1, 1]);

    let result = select_random(&candidates, 500, true, &mut rng);

    assert_eq!(ids(&result.items), vec![2, 2]);
    assert_eq!(result.total, 500);
    assert_eq!(result.remaining, 0);
    assert_eq!(rng.lens, vec![2, 2]);
}

#[test]
fn test_duplicates_can_repeat_cheap_item_until_budget_exhausted() {
    let candidates = vec![make_menu(1, 100)];
    let mut rng = ScriptedRandom::new(vec![0]);

    let result = select_random(&candidates, 350, true, &mut rng);

    assert_eq!(ids(&result.items), vec![1, 1, 1]);
    assert_eq!(result.total, 300);
    assert_eq!(result.remaining, 50);
}

#[test]
fn test_affordable_set_shrinks_with_remaining_budget() {
    let candidates = vec![make_menu(1, 100), make_menu(2, 400), make_menu(3, 50)];
    let mut rng = ScriptedRandom::new(vec![1, 0]);

    let result = select_random(&candidates, 500, true, &mut rng);

    // 400 first, then only 100 and 50 fit the remaining 100.
    assert_eq!(ids(&result.items), vec![2, 1]);
    assert_eq!(result.remaining, 0);
    assert_eq!(rng.lens, vec![3, 2]);
}

#[test]
fn test_free_item_is_selected_once_with_duplicates() {
    let candidates = vec![make_menu(1, 0), make_menu(2, 100)];
    let mut rng = ScriptedRandom::new(vec![0]);

    let result = select_random(&candidates, 200, true, &mut rng);

    assert_eq!(ids(&result.items), vec![1, 2, 2]);
    assert_eq!(result.total, 200);
    assert_eq!(result.remaining, 0);
}

#[test]
fn test_zero_budget_still_takes_free_item() {
    let candidates = vec![make_menu(1, 0), make_menu(2, 100)];
    let mut rng = ScriptedRandom::new(vec![0]);

    let result = select_random(&candidates, 0, true, &mut rng);

    assert_eq!(ids(&result.items), vec![1]);
    assert_eq!(result.total, 0);
    assert_eq!(result.remaining, 0);
}

#[test]
fn test_no_duplicates_exhausts_pool_when_budget_is_large() {
    let candidates = vec![make_menu(1, 10), make_menu(2, 20), make_menu(3, 30)];
    let mut rng = SeededRandom::new(7);

    let result = select_random(&candidates, 10_000, false, &mut rng);

    let mut selected = ids(&result.items);
    selected.sort();
    assert_eq!(selected, vec![1, 2, 3]);
    assert_eq!(result.total, 60);
    assert_eq!(result.remaining, 9_940);
}

#[test]
fn test_seeded_random_is_reproducible() {
    let candidates: Vec<MenuRecord> = (1..=20).map(|i| make_menu(i, i * 37 % 300 + 1)).collect();

    let first = select_random(&candidates, 1000, true, &mut SeededRandom::new(42));
    let second = select_random(&candidates, 1000, true, &mut SeededRandom::new(42));

    assert_eq!(first, second);
}

#[test]
fn invariant_budget_and_uniqueness_hold_across_seeds() {
    let candidates: Vec<MenuRecord> = (1..=15).map(|i| make_menu(i, i * 53 % 400)).collect();

    for seed in 0..200u64 {
        let budget = (seed as u32 * 97) % 1500;
        let allow_duplicates = seed % 2 == 0;
        let mut rng = SeededRandom::new(seed);

        let result = select_random(&candidates, budget, allow_duplicates, &mut rng);

        let sum: u32 = result.items.iter().map(|m| m.price).sum();
        assert_eq!(sum, result.total, "total must equal sum of item prices");
        assert!(result.total <= budget, "seed {seed}: total exceeds budget");
        assert_eq!(result.total + result.remaining, budget);

        // Nothing left in the pool should still fit.
        let picked: HashSet<u32> = ids(&result.items).into_iter().collect();
        let leftover_fits = candidates.iter().any(|m| {
            m.price <= result.remaining
                && ((allow_duplicates && m.price > 0) || !picked.contains(&m.id.get()))
        });
        assert!(!leftover_fits, "seed {seed}: selection stopped early");

        if !allow_duplicates {
            assert_eq!(picked.len(), result.items.len(), "seed {seed}: duplicate ids");
        }
    }
}

#[test]
fn test_default_combo_selector_filters_then_draws() {
    let candidates = vec![
        MenuRecord::new(1, "Soup", 150, "soup", "side"),
        MenuRecord::new(2, "Pizza", 400, "pizza", "main"),
        MenuRecord::new(3, "Salad", 300, "salad", "side"),
    ];
    let spec = FilterSpec::new().genre("side");
    let options = RandomOptions::default().with_budget(450).with_duplicates(false);

    let result = ComboSelector::default().select(&candidates, Some(&spec), options);

    // Both sides fit together and nothing else is eligible.
    let mut selected = ids(&result.items);
    selected.sort();
    assert_eq!(selected, vec![1, 3]);
    assert_eq!(result.total, 450);
    assert_eq!(result.remaining, 0);
}
