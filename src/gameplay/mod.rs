pub mod action;
pub use action::*;

pub mod choice;
pub use choice::*;

pub mod declaration;
pub use declaration::*;

pub mod filter;
pub use filter::*;

pub mod illegal;
pub use illegal::*;

pub mod matches;
pub use matches::*;

pub mod odds;
pub use odds::*;

pub mod request;
pub use request::*;

pub mod score;
pub use score::*;

pub mod state;
pub use state::*;

pub mod token;
pub use token::*;
