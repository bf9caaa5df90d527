mod filter;
mod league;
mod standing;
mod team;

pub use filter::*;
pub use league::*;
pub use standing::*;
pub use team::*;
