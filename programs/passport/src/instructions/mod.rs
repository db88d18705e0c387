pub mod calculate_score;
pub mod create_identity;
pub mod delete_identity;
pub mod delete_score;
pub mod transfer;
pub mod transfer_identity;
pub mod unverify_identity;
pub mod verify_identity;

pub use calculate_score::*;
pub use create_identity::*;
pub use delete_identity::*;
pub use delete_score::*;
pub use transfer::*;
pub use transfer_identity::*;
pub use unverify_identity::*;
pub use verify_identity::*;
