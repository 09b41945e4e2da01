pub mod ledger;
pub use ledger::*;

pub mod record;
pub use record::*;

pub mod standing;
pub use standing::*;
