use std::path::Path;

use crate::animation::AnimationClip;
use crate::errors::{Result, ViewerError};

use super::model::{LoadedModel, Model};

/// Blocking model and animation source.
///
/// Loading runs synchronously on the frame loop; a malformed or missing file
/// fails fast with an error.
pub trait AssetLoader {
    fn load_model(&self, path: &Path) -> Result<Model>;

    fn load_animations(&self, path: &Path) -> Result<Vec<AnimationClip>>;

    /// Model and clips in one call. Loaders that parse the file once should
    /// override this.
    fn load(&self, path: &Path) -> Result<LoadedModel> {
        Ok(LoadedModel {
            path: path.to_path_buf(),
            model: self.load_model(path)?,
            clips: self.load_animations(path)?,
        })
    }
}

/// Rejects paths whose extension is not in `accepted` (case-insensitive,
/// entries written with the leading dot, e.g. `".glb"`).
pub fn check_extension(path: &Path, accepted: &[String]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()));

    let ok = ext
        .as_deref()
        .is_some_and(|ext| accepted.iter().any(|a| a.eq_ignore_ascii_case(ext)));

    if ok {
        Ok(())
    } else {
        Err(ViewerError::UnsupportedExtension {
            path: path.to_path_buf(),
            accepted: accepted.join(" or "),
        })
    }
}
