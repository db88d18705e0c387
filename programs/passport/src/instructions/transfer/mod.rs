pub mod cancel;
pub mod claim;
pub mod initiate;

pub use cancel::*;
pub use claim::*;
pub use initiate::*;
