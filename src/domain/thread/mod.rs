//! Thread module - request value objects and read models for threads.

mod records;
mod values;

pub use records::{CreatedThread, ThreadDetail, ThreadRecord};
pub use values::{GetThreadDetails, NewThread};
