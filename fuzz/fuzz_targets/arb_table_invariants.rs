#![no_main]
use libfuzzer_sys::fuzz_target;
use probe_table::ProbingHashTable;

fuzz_target!(|m: ProbingHashTable| {
    assert!(m.invariants());
});
