mod database;
mod league;
mod standing;
mod team;

pub use database::*;
pub use league::*;
pub use standing::*;
pub use team::*;
