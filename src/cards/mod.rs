pub mod card;
pub use card::*;

pub mod category;
pub use category::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod kicks;
pub use kicks::*;

pub mod mode;
pub use mode::*;

pub mod strength;
pub use strength::*;
