pub mod identity;
pub mod score;
pub mod transfer;

pub use identity::*;
pub use score::*;
pub use transfer::*;
