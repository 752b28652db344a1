pub mod constraint;
pub use constraint::*;

pub mod pairs;
pub use pairs::*;

pub mod range;
pub use range::*;

pub mod score;
pub use score::*;
