use crate::rig::shared::traits::{Reporter, SceneHost};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum OperatorResult {
    Finished { count: usize },
    Cancelled,
}

/// A user-invokable action on the active object.
pub trait Operator {
    fn id(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn execute<H: SceneHost, R: Reporter>(&self, host: &mut H, reporter: &mut R) -> OperatorResult;
}
