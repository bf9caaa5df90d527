mod memory;
mod remote;

pub use memory::*;
pub use remote::*;
