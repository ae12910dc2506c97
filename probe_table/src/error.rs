use thiserror::Error;

// rejected construction parameters
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidArgument {
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(isize),
    #[error("capacity must be positive")]
    ZeroCapacity,
    #[error("capacity {0} is too large to allocate")]
    CapacityTooLarge(usize),
    #[error("load factor must be between 0 and 1, got {0}")]
    LoadFactorOutOfRange(f64),
}

/// Failure of an insertion. Both variants mean the table's bookkeeping can no
/// longer hold the entry; neither is expected for sensible parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("probe sequence for key {key} found no free slot among {capacity} slots")]
    ProbeExhausted { key: i32, capacity: usize },
    #[error("cannot grow table beyond {capacity} slots")]
    CapacityOverflow { capacity: usize },
}
