pub mod initialize_registry;
pub use initialize_registry::*;

pub mod create_election;
pub use create_election::*;

pub mod vote;
pub use vote::*;

pub mod finish;
pub use finish::*;

pub mod withdraw_reward;
pub use withdraw_reward::*;

pub mod withdraw_platform_fee;
pub use withdraw_platform_fee::*;

pub mod refund_on_voting_fail;
pub use refund_on_voting_fail::*;

pub mod collect_fee;
pub use collect_fee::*;

pub mod queries;
pub use queries::*;
