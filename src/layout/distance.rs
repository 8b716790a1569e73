/// Slot index of the search control. Only slot 0 precedes it.
pub const RESERVED_INDEX: usize = 1;

/// Closeness of `slot` to the reserved slot; smaller is closer.
///
/// Slots after the reserved one are offset by one, so `reserved + k` has
/// distance `k - 1` while `reserved - k` has distance `k`. The reserved slot
/// itself is never allocated and reports 0.
#[must_use]
pub fn slot_distance(slot: usize, reserved: usize) -> usize {
	if slot < reserved {
		reserved - slot
	} else {
		slot.saturating_sub(reserved + 1)
	}
}

/// Every allocatable slot below `total_slots`, closest first.
///
/// Equal distances keep ascending index order.
#[must_use]
pub fn proximity_order(total_slots: usize, reserved: usize) -> Vec<usize> {
	let mut slots: Vec<usize> = (0..total_slots).filter(|&slot| slot != reserved).collect();
	slots.sort_by_key(|&slot| slot_distance(slot, reserved));
	slots
}
