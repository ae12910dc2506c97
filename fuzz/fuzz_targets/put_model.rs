#![no_main]
use libfuzzer_sys::{
    arbitrary::{self, Arbitrary, Unstructured},
    fuzz_target,
};

use std::collections::BTreeMap;

use probe_table::{arbitrary::arb_load_factor, IntMap, ProbingHashTable};

#[derive(Debug)]
struct Input {
    capacity: isize,
    load_factor: f64,
    entries: Vec<(i32, i64)>,
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Input {
            capacity: u.int_in_range(1..=64)?,
            load_factor: arb_load_factor(u)?,
            entries: u.arbitrary()?,
        })
    }
}

fuzz_target!(|input: Input| {
    let mut table =
        ProbingHashTable::with_capacity_and_load_factor(input.capacity, input.load_factor)
            .unwrap();
    let mut model = BTreeMap::<i32, i64>::new();
    for (k, v) in input.entries {
        assert_eq!(table.put(k, v).unwrap(), model.put(k, v).unwrap());
    }
    assert_eq!(table.len(), model.len());
    for (&k, &v) in &model {
        assert_eq!(table.get(k), Some(v));
    }
    assert!(table.invariants());
});
