pub mod classification;
pub mod joint;
pub mod mesh;
pub mod modifier;
pub mod report;
pub mod scene_object;
pub mod skeleton;
pub use classification::Classification;
pub use joint::Joint;
pub use mesh::*;
pub use modifier::*;
pub use report::Report;
pub use scene_object::*;
pub use skeleton::Skeleton;
