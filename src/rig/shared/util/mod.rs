pub mod gltf_import;
pub use gltf_import::*;
