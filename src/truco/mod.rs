pub mod compare;
pub use compare::*;

pub mod reasonable;
pub use reasonable::*;

pub mod stats;
pub use stats::*;

pub mod strength;
pub use strength::*;
