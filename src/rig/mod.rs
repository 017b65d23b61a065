pub mod classifier;
pub mod mutator;
pub mod operators;
pub mod shared;
pub use classifier::*;
pub use mutator::remove;
pub use operators::*;
pub use shared::*;
