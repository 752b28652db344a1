pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod hand;
pub use hand::*;

pub mod muestra;
pub use muestra::*;

pub mod number;
pub use number::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;
