pub mod macros;
pub mod structs;

pub use structs::FloorSequence;
