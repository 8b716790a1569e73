use std::collections::HashSet;

use super::assignment::SlotAssignment;
use super::distance::proximity_order;
use super::filler::filler_for_slot;
use crate::types::{Item, SlotContent};

/// Place `source` items into slots by proximity to `reserved_index`.
///
/// Items are taken in source order and assigned to the closest free slot;
/// an id that was already placed is skipped. When the source runs dry the
/// remaining slots receive filler keyed by their own index. Items beyond
/// the grid capacity are not placed.
#[must_use]
pub fn allocate<'a, I>(source: I, total_slots: usize, reserved_index: usize) -> SlotAssignment
where
	I: IntoIterator<Item = &'a Item>,
{
	let mut placed: HashSet<&str> = HashSet::new();
	let mut source = source
		.into_iter()
		.filter(|&item| placed.insert(item.id.as_str()))
		.fuse();

	// Every index except the reserved one is overwritten below.
	let mut slots = vec![SlotContent::Search; total_slots];
	for slot in proximity_order(total_slots, reserved_index) {
		slots[slot] = match source.next() {
			Some(item) => SlotContent::Item(item.clone()),
			None => SlotContent::Filler(filler_for_slot(slot)),
		};
	}

	SlotAssignment::new(reserved_index, slots)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::layout::RESERVED_INDEX;

	fn items(count: usize) -> Vec<Item> {
		(0..count)
			.map(|n| Item::new(format!("item-{n}"), format!("Item {n}"), ""))
			.collect()
	}

	#[test]
	fn first_item_lands_right_after_the_search_slot() {
		let source = items(3);
		let assignment = allocate(&source, 10, RESERVED_INDEX);
		assert_eq!(assignment.get(RESERVED_INDEX), Some(&SlotContent::Search));
		assert_eq!(assignment.position_of("item-0"), Some(2));
		assert_eq!(assignment.position_of("item-1"), Some(0));
		assert_eq!(assignment.position_of("item-2"), Some(3));
	}

	#[test]
	fn remaining_slots_get_index_keyed_filler() {
		let source = items(2);
		let assignment = allocate(&source, 6, RESERVED_INDEX);
		assert_eq!(assignment.filler_count(), 3);
		for slot in [3, 4, 5] {
			assert_eq!(
				assignment.get(slot),
				Some(&SlotContent::Filler(filler_for_slot(slot)))
			);
		}
	}

	#[test]
	fn covers_every_slot_without_duplicate_ids() {
		let mut source = items(40);
		source.push(source[3].clone());
		source.insert(0, source[7].clone());
		for total in [0, 1, 2, 3, 10, 60, 97] {
			let assignment = allocate(&source, total, RESERVED_INDEX);
			assert_eq!(assignment.total_slots(), total);

			let mut seen = HashSet::new();
			for (slot, content) in assignment.iter() {
				if slot == RESERVED_INDEX {
					assert_eq!(content, &SlotContent::Search);
					continue;
				}
				assert_ne!(content, &SlotContent::Search, "slot {slot} left unassigned");
				if let Some(item) = content.item() {
					assert!(seen.insert(item.id.clone()), "duplicate id {}", item.id);
				}
			}
		}
	}

	#[test]
	fn excess_items_are_not_placed() {
		let source = items(20);
		let assignment = allocate(&source, 8, RESERVED_INDEX);
		assert_eq!(assignment.items().count(), 7);
		assert_eq!(assignment.filler_count(), 0);
		assert_eq!(assignment.position_of("item-7"), None);
	}

	#[test]
	fn allocation_is_idempotent() {
		let source = items(25);
		assert_eq!(
			allocate(&source, 60, RESERVED_INDEX),
			allocate(&source, 60, RESERVED_INDEX)
		);
	}

	#[test]
	fn empty_source_is_all_filler() {
		let assignment = allocate(std::iter::empty(), 60, RESERVED_INDEX);
		assert_eq!(assignment.items().count(), 0);
		assert_eq!(assignment.filler_count(), 59);
	}
}
