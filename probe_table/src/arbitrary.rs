use arbitrary::{Arbitrary, Unstructured};

use crate::ProbingHashTable;

const MAX_CAPACITY: isize = 64;
const MAX_ENTRIES: usize = 1_000;

// Load factors below 1/4 double the table on nearly every new key, which
// makes large inputs allocate without bound.
pub fn arb_load_factor(u: &mut Unstructured<'_>) -> arbitrary::Result<f64> {
    Ok(f64::from(u.int_in_range(25..=100u8)?) / 100.0)
}

impl<'a> Arbitrary<'a> for ProbingHashTable {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let capacity = u.int_in_range(1..=MAX_CAPACITY)?;
        let load_factor = arb_load_factor(u)?;
        let mut table = ProbingHashTable::with_capacity_and_load_factor(capacity, load_factor)
            .map_err(|_| arbitrary::Error::IncorrectFormat)?;
        for _ in 0..u.int_in_range(0..=MAX_ENTRIES)? {
            table
                .put(u.arbitrary()?, u.arbitrary()?)
                .map_err(|_| arbitrary::Error::IncorrectFormat)?;
        }
        Ok(table)
    }
}
