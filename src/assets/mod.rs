//! Asset Loading
//!
//! Models and their animation clips come from an [`AssetLoader`]. The viewer
//! checks the file extension against the accepted list before handing the
//! path to a loader; [`GltfLoader`] is the built-in implementation.

pub mod loader;
pub mod loaders;
pub mod model;

pub use loader::{AssetLoader, check_extension};
pub use loaders::GltfLoader;
pub use model::{LoadedModel, MeshData, Model};
