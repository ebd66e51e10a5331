//! Role behaviours dispatched by the role state machine

pub mod field_player;
pub mod goalkeeper;
pub mod restart;
pub mod traits;

pub use field_player::FieldPlayerBehavior;
pub use goalkeeper::GoalkeeperBehavior;
pub use restart::{IdleBehavior, RestartBehavior};
pub use traits::RoleBehavior;
