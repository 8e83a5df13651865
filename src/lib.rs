#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod animation;
pub mod app;
pub mod assets;
pub mod errors;
pub mod gizmo;
pub mod math;
pub mod render;
pub mod scene;
pub mod utils;

pub use animation::{AnimationClip, AnimationPlayer, BonePose};
pub use app::{Input, ViewerSession, ViewerSettings};
pub use assets::{AssetLoader, GltfLoader, LoadedModel, Model};
pub use errors::{Result, ViewerError};
pub use gizmo::{DragMode, Gizmo, GizmoAxis};
pub use math::Ray;
pub use render::{Color, DrawList, RenderSurface};
pub use scene::{Bone, Camera, Pose, Skeleton, Transform, resolve_pose};
pub use utils::OrbitControls;
