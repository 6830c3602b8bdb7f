use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid rows must all have the same length")]
    InvalidRowShape,
    #[error("Grid dimensions exceed the supported coordinate range")]
    OversizedGrid,
}

pub type Result<T> = core::result::Result<T, GridError>;
