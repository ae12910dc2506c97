use probe_table::{IntMap, InvalidArgument, ProbingHashTable};

fn table() -> ProbingHashTable {
    ProbingHashTable::with_capacity(5).unwrap()
}

#[test]
fn negative_capacity() {
    assert!(matches!(
        ProbingHashTable::with_capacity(-1),
        Err(InvalidArgument::NegativeCapacity(-1))
    ));
}

#[test]
fn huge_capacity_is_an_error() {
    assert!(matches!(
        ProbingHashTable::with_capacity(isize::MAX),
        Err(InvalidArgument::CapacityTooLarge(_))
    ));
}

#[test]
fn wrong_load_factor() {
    assert!(matches!(
        ProbingHashTable::with_capacity_and_load_factor(10, 5.0),
        Err(InvalidArgument::LoadFactorOutOfRange(_))
    ));
}

#[test]
fn put_returns_previous_value() {
    let mut m = table();
    assert_eq!(m.put(1, 100), Ok(None));
    assert_eq!(m.put(2, 50), Ok(None));
    assert_eq!(m.put(1, 15), Ok(Some(100)));
}

#[test]
fn size_counts_distinct_keys() {
    let mut m = table();
    m.put(7, 1800).unwrap();
    m.put(7, 70).unwrap();
    assert_eq!(m.len(), 1);
    m.put(2, 70).unwrap();
    assert_eq!(m.len(), 2);
}

#[test]
fn size_after_increasing_capacity() {
    let mut m = table();
    for (k, v) in [(7, 1800), (1, 70), (-1, 70), (10, 70), (3, 75), (9, 175)] {
        assert_eq!(m.put(k, v), Ok(None));
    }
    assert_eq!(m.len(), 6);
    assert!(m.capacity() > 5);
    assert_eq!(m.get(-1), Some(70));
    assert_eq!(m.get(9), Some(175));
}

#[test]
fn many_keys_through_trait() {
    fn fill<M: IntMap>(m: &mut M) {
        for k in -500..500 {
            m.put(k * 7, i64::from(k)).unwrap();
        }
        for k in -500..500 {
            m.put(k * 7, i64::from(k) * 2).unwrap();
        }
    }
    let mut m = ProbingHashTable::new();
    fill(&mut m);
    assert_eq!(IntMap::len(&m), 1000);
    for k in -500..500 {
        assert_eq!(IntMap::get(&m, k * 7), Some(i64::from(k) * 2));
    }
    assert_eq!(m.get(3), None);
    assert!(m.invariants());
}
