mod loaders;
mod repositories;

pub use loaders::*;
pub use repositories::*;
