pub mod hands;
pub use hands::*;

pub mod pairs;
pub use pairs::*;

pub mod pool;
pub use pool::*;

pub mod progress;
pub use progress::*;
