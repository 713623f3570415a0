use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("allocation of {size} bytes failed")]
pub struct AllocError {
    pub size: usize,
}

/// Errors produced while obtaining a new allocation for a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum ReserveError {
    CapacityOverflow(CapacityOverflow),
    Alloc(AllocError),
}

/// Errors produced by inserting at an arbitrary position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum InsertError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
    Alloc(AllocError),
}

impl From<ReserveError> for InsertError {
    fn from(value: ReserveError) -> Self {
        match value {
            ReserveError::CapacityOverflow(e) => e.into(),
            ReserveError::Alloc(e) => e.into(),
        }
    }
}
