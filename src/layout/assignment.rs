use serde::Serialize;

use crate::types::{Item, SlotContent};

/// Total mapping from slot index to slot content.
///
/// Index `i` of the mapping is grid slot `i`. The reserved slot, when it lies
/// inside the grid, holds [`SlotContent::Search`]; every other slot holds
/// exactly one item or filler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotAssignment {
	reserved_index: usize,
	slots: Vec<SlotContent>,
}

impl SlotAssignment {
	pub(crate) fn new(reserved_index: usize, slots: Vec<SlotContent>) -> Self {
		Self {
			reserved_index,
			slots,
		}
	}

	#[must_use]
	pub fn total_slots(&self) -> usize {
		self.slots.len()
	}

	#[must_use]
	pub fn reserved_index(&self) -> usize {
		self.reserved_index
	}

	#[must_use]
	pub fn get(&self, slot: usize) -> Option<&SlotContent> {
		self.slots.get(slot)
	}

	pub fn iter(&self) -> impl Iterator<Item = (usize, &SlotContent)> {
		self.slots.iter().enumerate()
	}

	/// Real items in slot order.
	pub fn items(&self) -> impl Iterator<Item = (usize, &Item)> {
		self.iter()
			.filter_map(|(slot, content)| content.item().map(|item| (slot, item)))
	}

	/// Slot holding the item with `id`.
	#[must_use]
	pub fn position_of(&self, id: &str) -> Option<usize> {
		self.items()
			.find_map(|(slot, item)| (item.id == id).then_some(slot))
	}

	#[must_use]
	pub fn filler_count(&self) -> usize {
		self.slots.iter().filter(|content| content.is_filler()).count()
	}
}
