use proptest::prelude::*;

use crate::ProbingHashTable;

const MAX_CAPACITY: isize = 32;
const MAX_ENTRIES: usize = 200;

// mostly small keys so that overwrites and collisions are common
pub fn arb_key() -> impl Strategy<Value = i32> {
    prop_oneof![3 => -40..40i32, 1 => any::<i32>()]
}

pub fn arb_entries() -> impl Strategy<Value = Vec<(i32, i64)>> {
    proptest::collection::vec((arb_key(), any::<i64>()), 0..=MAX_ENTRIES)
}

pub fn arb_empty_table() -> impl Strategy<Value = ProbingHashTable> {
    (1..=MAX_CAPACITY, 25..=100u8).prop_map(|(capacity, percent)| {
        ProbingHashTable::with_capacity_and_load_factor(capacity, f64::from(percent) / 100.0)
            .unwrap()
    })
}

pub fn arb_table() -> impl Strategy<Value = ProbingHashTable> {
    (arb_empty_table(), arb_entries()).prop_map(|(mut table, entries)| {
        for (key, value) in entries {
            table.put(key, value).unwrap();
        }
        table
    })
}
