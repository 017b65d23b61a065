pub mod operator;
pub mod reporter;
pub mod scene_host;
pub use operator::{Operator, OperatorResult};
pub use reporter::{LogReporter, Reporter};
pub use scene_host::SceneHost;
