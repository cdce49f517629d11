pub mod aggregation;
pub mod budgeting;
pub mod filters;
pub mod random;

use crate::menu::MenuRecord;
use crate::types::selection_result::{RandomOptions, RandomSelectionResult};
pub use aggregation::{categories, genres};
pub use budgeting::select_random;
pub use filters::{filter, FilterSpec};
pub use random::{RandomSource, SeededRandom, ThreadRandom};

/// Filter-then-draw pipeline over an in-memory record set.
pub struct ComboSelector<R> {
	rng: R,
}

impl Default for ComboSelector<ThreadRandom> {
	fn default() -> Self {
		Self { rng: ThreadRandom }
	}
}

impl<R> ComboSelector<R>
where
	R: RandomSource,
{
	pub fn new(rng: R) -> Self {
		Self { rng }
	}

	pub fn select(
		&mut self,
		records: &[MenuRecord],
		spec: Option<&FilterSpec>,
		options: RandomOptions,
	) -> RandomSelectionResult {
		// 1. Filtering Phase
		let candidates = filter(records, spec);

		// 2. Drawing Phase
		let result = select_random(
			&candidates,
			options.budget,
			options.allow_duplicates,
			&mut self.rng,
		);

		debug_assert!(
			options.allow_duplicates
				|| result
					.items
					.iter()
					.enumerate()
					.all(|(i, a)| result.items[i + 1..].iter().all(|b| a.id != b.id))
		);

		tracing::debug!(
			candidates = candidates.len(),
			items = result.items.len(),
			total = result.total,
			remaining = result.remaining,
			"drew random combination"
		);

		result
	}
}
