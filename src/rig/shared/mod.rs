pub mod config;
pub mod enums;
pub mod errors;
pub mod mode_guard;
pub mod scene;
pub mod structs;
pub mod traits;
pub mod types;
pub mod util;

pub use config::Config;
pub use errors::RigError;
pub use mode_guard::ModeGuard;
pub use scene::Scene;
pub use types::*;
