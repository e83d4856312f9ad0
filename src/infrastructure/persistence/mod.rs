//! Rubric persistence adapters.

pub mod file;
pub mod memory;

pub use file::FileRubricRepository;
pub use memory::InMemoryRubricRepository;
