pub mod combinations;
pub use combinations::*;

pub mod numeric;
pub use numeric::*;

pub mod permutations;
pub use permutations::*;
