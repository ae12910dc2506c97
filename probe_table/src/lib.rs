#![deny(clippy::disallowed_method)]

//! An open-addressing hash table from `i32` keys to `i64` values.
//!
//! Collisions are resolved by linear probing and the backing vector doubles
//! whenever the number of entries passes `round(capacity * load_factor)`.
//! There is no removal, so probe chains are never broken and no tombstones
//! are needed.

use itertools::Itertools;
use log::{debug, error};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
mod error;
#[cfg(feature = "proptest")]
pub mod proptest;

pub use error::{InvalidArgument, TableError};

pub const DEFAULT_CAPACITY: usize = 16;
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// A map from `i32` keys to `i64` values.
pub trait IntMap {
    fn get(&self, key: i32) -> Option<i64>;
    // returns the value previously stored under `key`
    fn put(&mut self, key: i32, value: i64) -> Result<Option<i64>, TableError>;
    // the number of distinct keys stored
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type Slot = Option<(i32, i64)>;

/// Linear-probing hash table with `i32` keys and `i64` values.
///
/// The table does no internal locking. Mutation goes through `&mut self`, so
/// sharing one table between threads needs an external lock such as a
/// `Mutex`.
#[derive(Clone, Debug)]
pub struct ProbingHashTable {
    slots: Vec<Slot>,
    load_factor: f64,
    threshold: usize,
    items: usize,
    #[cfg(feature = "debug")]
    pub probe_lengths: BTreeMap<usize, usize>,
}

impl ProbingHashTable {
    pub fn new() -> Self {
        ProbingHashTable::from_parts(vec![None; DEFAULT_CAPACITY], DEFAULT_LOAD_FACTOR)
    }

    pub fn with_capacity(capacity: isize) -> Result<Self, InvalidArgument> {
        ProbingHashTable::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates a table with `capacity` empty slots.
    ///
    /// Fails if `capacity` is not positive, too large to allocate, or if
    /// `load_factor` lies outside `[0, 1]` (NaN included).
    pub fn with_capacity_and_load_factor(
        capacity: isize,
        load_factor: f64,
    ) -> Result<Self, InvalidArgument> {
        let capacity =
            usize::try_from(capacity).map_err(|_| InvalidArgument::NegativeCapacity(capacity))?;
        if capacity == 0 {
            return Err(InvalidArgument::ZeroCapacity);
        }
        if !(0.0..=1.0).contains(&load_factor) {
            return Err(InvalidArgument::LoadFactorOutOfRange(load_factor));
        }
        let slots = alloc_slots(capacity).ok_or(InvalidArgument::CapacityTooLarge(capacity))?;
        Ok(ProbingHashTable::from_parts(slots, load_factor))
    }

    fn from_parts(slots: Vec<Slot>, load_factor: f64) -> Self {
        Self {
            threshold: growth_threshold(slots.len(), load_factor),
            slots,
            load_factor,
            items: 0,
            #[cfg(feature = "debug")]
            probe_lengths: BTreeMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }
    // the entry count above which the next insertion grows the table
    pub fn growth_threshold(&self) -> usize {
        self.threshold
    }
    pub fn len(&self) -> usize {
        self.items
    }
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Returns `None` once the probe reaches an empty slot; lookup never fails.
    pub fn get(&self, key: i32) -> Option<i64> {
        self.find(key).and_then(|index| self.slots[index]).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.find(key).is_some()
    }

    /// Stores `value` under `key` and returns the value it replaced, if any.
    ///
    /// Inserting a new key may double the capacity before returning. The
    /// errors are only reachable if the table cannot grow any further; on
    /// error the table is left exactly as it was before the call.
    pub fn put(&mut self, key: i32, value: i64) -> Result<Option<i64>, TableError> {
        let previous = insert_raw(
            &mut self.slots,
            key,
            value,
            #[cfg(feature = "debug")]
            &mut self.probe_lengths,
        )
        .map_err(|e| {
            error!("{} (holding {} entries)", e, self.items);
            e
        })?;
        if previous.is_none() {
            self.items += 1;
            if self.items > self.threshold || self.items == self.slots.len() {
                if let Err(e) = self.grow() {
                    // the slot was empty before this call and nothing is ever removed
                    if let Some(index) = self.find(key) {
                        self.slots[index] = None;
                    }
                    self.items -= 1;
                    error!("{} (holding {} entries)", e, self.items);
                    return Err(e);
                }
            }
        }
        Ok(previous)
    }

    // index of the slot holding `key`, following the same probe sequence as insertion
    fn find(&self, key: i32) -> Option<usize> {
        let capacity = self.slots.len();
        for step in 0..max_probes(capacity) {
            let index = probe_index(key, step, capacity);
            match self.slots[index] {
                Some((k, _)) if k == key => return Some(index),
                Some(_) => {}
                None => return None,
            }
        }
        None
    }

    fn grow(&mut self) -> Result<(), TableError> {
        let capacity = self.slots.len();
        match capacity.checked_mul(2) {
            Some(new_capacity) => self.rehash(new_capacity),
            None => Err(TableError::CapacityOverflow { capacity }),
        }
    }

    // replays every entry into a fresh vector of `capacity` slots; the table
    // is untouched unless the whole replay succeeds
    fn rehash(&mut self, capacity: usize) -> Result<(), TableError> {
        let old_capacity = self.slots.len();
        let mut slots = alloc_slots(capacity).ok_or(TableError::CapacityOverflow {
            capacity: old_capacity,
        })?;
        let mut items = 0;
        for &(key, value) in self.slots.iter().flatten() {
            if insert_raw(
                &mut slots,
                key,
                value,
                #[cfg(feature = "debug")]
                &mut self.probe_lengths,
            )?
            .is_none()
            {
                items += 1;
            }
        }
        debug!(
            "grew table from {} to {} slots, replayed {} entries",
            old_capacity, capacity, items
        );
        self.slots = slots;
        self.items = items;
        self.threshold = growth_threshold(capacity, self.load_factor);
        Ok(())
    }

    pub fn invariants(&self) -> bool {
        self.invariant1() && self.invariant2() && self.invariant3() && self.invariant4()
    }

    // no key occupies two slots
    fn invariant1(&self) -> bool {
        let mut seen = BTreeSet::new();
        self.slots.iter().flatten().all(|&(k, _)| seen.insert(k))
    }

    // every stored key is found where it lives
    fn invariant2(&self) -> bool {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|(k, _)| (i, k)))
            .all(|(i, k)| self.find(k) == Some(i))
    }

    fn invariant3(&self) -> bool {
        self.items == self.slots.iter().flatten().count()
    }

    // never full, and the threshold matches the current capacity
    fn invariant4(&self) -> bool {
        self.items < self.slots.len()
            && self.threshold == growth_threshold(self.slots.len(), self.load_factor)
    }
}

impl Default for ProbingHashTable {
    fn default() -> Self {
        ProbingHashTable::new()
    }
}

// one entry per slot, e.g. `[0: null, 1: 1 => 10, 2: null]`
impl fmt::Display for ProbingHashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.slots
                .iter()
                .enumerate()
                .format_with(", ", |(i, slot), f| match slot {
                    Some((k, v)) => f(&format_args!("{}: {} => {}", i, k, v)),
                    None => f(&format_args!("{}: null", i)),
                })
        )
    }
}

impl IntMap for ProbingHashTable {
    fn get(&self, key: i32) -> Option<i64> {
        ProbingHashTable::get(self, key)
    }
    fn put(&mut self, key: i32, value: i64) -> Result<Option<i64>, TableError> {
        ProbingHashTable::put(self, key, value)
    }
    fn len(&self) -> usize {
        ProbingHashTable::len(self)
    }
}

// a dumb map to test against
impl IntMap for BTreeMap<i32, i64> {
    fn get(&self, key: i32) -> Option<i64> {
        BTreeMap::get(self, &key).copied()
    }
    fn put(&mut self, key: i32, value: i64) -> Result<Option<i64>, TableError> {
        Ok(self.insert(key, value))
    }
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

// `None` when the allocator refuses `capacity` slots
fn alloc_slots(capacity: usize) -> Option<Vec<Slot>> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity).ok()?;
    slots.resize(capacity, None);
    Some(slots)
}

fn growth_threshold(capacity: usize, load_factor: f64) -> usize {
    (capacity as f64 * load_factor).round() as usize
}

// a negative key starts below slot 0 and revisits low slots before wrapping,
// so reaching every slot can take up to twice the capacity
fn max_probes(capacity: usize) -> usize {
    capacity.saturating_mul(2)
}

// The step is added before the outer remainder, not after it. For a negative
// key the truncating remainder is negative, so the sequence walks down towards
// slot 0 before climbing again.
#[inline]
fn probe_index(key: i32, step: usize, capacity: usize) -> usize {
    // a Vec never holds more than isize::MAX slots, so these fit an i64
    let capacity = capacity as i64;
    let raw = i64::from(key) % capacity + step as i64;
    (raw % capacity).unsigned_abs() as usize
}

#[inline]
fn insert_raw(
    slots: &mut [Slot],
    key: i32,
    value: i64,
    #[cfg(feature = "debug")] probe_lengths: &mut BTreeMap<usize, usize>,
) -> Result<Option<i64>, TableError> {
    let capacity = slots.len();
    for step in 0..max_probes(capacity) {
        let curr = &mut slots[probe_index(key, step, capacity)];
        match *curr {
            Some((k, old)) if k == key => {
                #[cfg(feature = "debug")]
                {
                    *probe_lengths.entry(step).or_insert(0) += 1;
                }
                *curr = Some((key, value));
                return Ok(Some(old));
            }
            None => {
                #[cfg(feature = "debug")]
                {
                    *probe_lengths.entry(step).or_insert(0) += 1;
                }
                *curr = Some((key, value));
                return Ok(None);
            }
            Some(_) => {}
        }
    }
    Err(TableError::ProbeExhausted { key, capacity })
}
