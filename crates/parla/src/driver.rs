mod memory;
pub use memory::Memory;

pub use parla_core::driver::{Driver, Query};
