use std::collections::HashMap;
use std::fs;
use std::path::Path;

use glam::{Mat4, Quat, Vec3};

use crate::animation::{
    AnimationClip, BonePose, BoneTracks, Interpolatable, InterpolationMode, KeyframeTrack,
};
use crate::assets::loader::AssetLoader;
use crate::assets::model::{LoadedModel, MeshData, Model};
use crate::errors::{Result, ViewerError};
use crate::scene::skeleton::{Bone, NO_PARENT, Skeleton};

/// Parsed document plus its binary buffers.
struct GltfSource {
    document: gltf::Document,
    buffers: Vec<gltf::buffer::Data>,
}

/// The first skin of a document, flattened into a bone table.
struct SkinData {
    skeleton: Skeleton,
    /// glTF node index -> bone index
    joint_of_node: HashMap<usize, usize>,
    /// Local rest pose per bone.
    rest: Vec<BonePose>,
}

/// Loads `.glb` / `.gltf` files with the `gltf` crate.
///
/// Only the first skin is used. Its joints become the bones (in joint
/// order) and every animation is baked against it; channels targeting nodes
/// outside the skin are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct GltfLoader;

impl GltfLoader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn open(path: &Path) -> Result<GltfSource> {
        let file = fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let gltf::Gltf { document, blob } = gltf::Gltf::from_reader(reader)?;

        let base = path.parent().unwrap_or_else(|| Path::new("./"));
        let buffers = gltf::import_buffers(&document, Some(base), blob)?;

        Ok(GltfSource { document, buffers })
    }

    fn model_name(path: &Path) -> String {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("model")
            .to_string()
    }

    fn build_model(source: &GltfSource, skin: Option<&SkinData>, name: String) -> Model {
        let mut meshes = Vec::new();

        let scene = source
            .document
            .default_scene()
            .or_else(|| source.document.scenes().next());

        if let Some(scene) = scene {
            for node in scene.nodes() {
                Self::collect_meshes(&node, Mat4::IDENTITY, source, &mut meshes);
            }
        } else {
            for node in source.document.nodes() {
                Self::collect_meshes(&node, Mat4::IDENTITY, source, &mut meshes);
            }
        }

        Model {
            name,
            meshes,
            skeleton: skin.map(|s| s.skeleton.clone()).unwrap_or_default(),
        }
    }

    /// Walks the node tree, baking node transforms into mesh positions.
    /// Skinned meshes keep their bind-space positions.
    fn collect_meshes(node: &gltf::Node, parent: Mat4, source: &GltfSource, out: &mut Vec<MeshData>) {
        let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

        if let Some(mesh) = node.mesh() {
            let placement = if node.skin().is_some() { Mat4::IDENTITY } else { world };
            let base_name = mesh
                .name()
                .map_or_else(|| format!("Mesh_{}", mesh.index()), str::to_string);

            for (i, primitive) in mesh.primitives().enumerate() {
                let reader = primitive.reader(|buffer| Some(source.buffers[buffer.index()].0.as_slice()));

                let positions: Vec<Vec3> = reader
                    .read_positions()
                    .map(|iter| iter.map(|p| placement.transform_point3(Vec3::from_array(p))).collect())
                    .unwrap_or_default();

                if positions.is_empty() {
                    continue;
                }

                let indices: Vec<u32> = reader
                    .read_indices()
                    .map(|i| i.into_u32().collect())
                    .unwrap_or_default();

                out.push(MeshData {
                    name: format!("{base_name}_{i}"),
                    positions,
                    indices,
                });
            }
        }

        for child in node.children() {
            Self::collect_meshes(&child, world, source, out);
        }
    }

    fn load_skin(document: &gltf::Document) -> Option<SkinData> {
        let skin = document.skins().next()?;
        let joints: Vec<gltf::Node> = skin.joints().collect();

        let joint_of_node: HashMap<usize, usize> = joints
            .iter()
            .enumerate()
            .map(|(bone, node)| (node.index(), bone))
            .collect();

        let mut parent_of_node: HashMap<usize, usize> = HashMap::new();
        for node in document.nodes() {
            for child in node.children() {
                parent_of_node.insert(child.index(), node.index());
            }
        }

        let bones = joints
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let name = node
                    .name()
                    .map_or_else(|| format!("Joint_{i}"), str::to_string);

                // Nearest ancestor that is itself a joint.
                let mut parent = NO_PARENT;
                let mut current = parent_of_node.get(&node.index());
                while let Some(&ancestor) = current {
                    if let Some(&bone) = joint_of_node.get(&ancestor) {
                        parent = i32::try_from(bone).unwrap_or(NO_PARENT);
                        break;
                    }
                    current = parent_of_node.get(&ancestor);
                }

                Bone::new(name, parent)
            })
            .collect();

        let rest = joints
            .iter()
            .map(|node| {
                let (t, r, s) = node.transform().decomposed();
                BonePose::new(Vec3::from_array(t), Quat::from_array(r), Vec3::from_array(s))
            })
            .collect();

        Some(SkinData {
            skeleton: Skeleton::new(skin.name().unwrap_or("Skeleton"), bones),
            joint_of_node,
            rest,
        })
    }

    fn load_clips(source: &GltfSource, skin: &SkinData) -> Vec<AnimationClip> {
        let bone_count = skin.skeleton.bone_count();
        let mut clips = Vec::new();

        for anim in source.document.animations() {
            let mut tracks = vec![BoneTracks::default(); bone_count];

            for channel in anim.channels() {
                let target = channel.target();
                let Some(&bone) = skin.joint_of_node.get(&target.node().index()) else {
                    continue;
                };

                let reader = channel.reader(|buffer| Some(source.buffers[buffer.index()].0.as_slice()));
                let Some(inputs) = reader.read_inputs() else {
                    continue;
                };
                let times: Vec<f32> = inputs.collect();

                let interpolation = match channel.sampler().interpolation() {
                    gltf::animation::Interpolation::Linear => InterpolationMode::Linear,
                    gltf::animation::Interpolation::Step => InterpolationMode::Step,
                    gltf::animation::Interpolation::CubicSpline => InterpolationMode::CubicSpline,
                };

                match reader.read_outputs() {
                    Some(gltf::animation::util::ReadOutputs::Translations(iter)) => {
                        let values = iter.map(Vec3::from_array).collect();
                        tracks[bone].translation = Self::checked_track(&anim, bone, times, values, interpolation);
                    }
                    Some(gltf::animation::util::ReadOutputs::Rotations(iter)) => {
                        let values = iter.into_f32().map(Quat::from_array).collect();
                        tracks[bone].rotation = Self::checked_track(&anim, bone, times, values, interpolation);
                    }
                    Some(gltf::animation::util::ReadOutputs::Scales(iter)) => {
                        let values = iter.map(Vec3::from_array).collect();
                        tracks[bone].scale = Self::checked_track(&anim, bone, times, values, interpolation);
                    }
                    _ => {}
                }
            }

            let name = anim
                .name()
                .map_or_else(|| format!("Animation_{}", anim.index()), str::to_string);
            clips.push(AnimationClip::bake(name, skin.skeleton.bones.clone(), &skin.rest, &tracks));
        }

        clips
    }

    /// Builds a keyframe track, dropping it when the sampler's output count
    /// does not match its input count.
    fn checked_track<T: Interpolatable>(
        anim: &gltf::Animation<'_>,
        bone: usize,
        times: Vec<f32>,
        values: Vec<T>,
        interpolation: InterpolationMode,
    ) -> Option<KeyframeTrack<T>> {
        let track = KeyframeTrack::new(times, values, interpolation);
        if track.is_valid() {
            return Some(track);
        }
        log::warn!(
            "Animation {}: skipping channel on bone {bone} ({} keyframes, {} values, expected {})",
            anim.index(),
            track.times.len(),
            track.values.len(),
            track.expected_value_count()
        );
        None
    }

    fn animations_for(source: &GltfSource, skin: Option<&SkinData>, path: &Path) -> Result<Vec<AnimationClip>> {
        match skin {
            Some(skin) => Ok(Self::load_clips(source, skin)),
            None if source.document.animations().next().is_some() => {
                Err(ViewerError::MissingSkin(path.display().to_string()))
            }
            None => Ok(Vec::new()),
        }
    }
}

impl AssetLoader for GltfLoader {
    fn load_model(&self, path: &Path) -> Result<Model> {
        let source = Self::open(path)?;
        let skin = Self::load_skin(&source.document);
        Ok(Self::build_model(&source, skin.as_ref(), Self::model_name(path)))
    }

    fn load_animations(&self, path: &Path) -> Result<Vec<AnimationClip>> {
        let source = Self::open(path)?;
        let skin = Self::load_skin(&source.document);
        Self::animations_for(&source, skin.as_ref(), path)
    }

    /// Parses the file once. Animations without a skin are dropped with a
    /// warning instead of failing the whole load.
    fn load(&self, path: &Path) -> Result<LoadedModel> {
        let source = Self::open(path)?;
        let skin = Self::load_skin(&source.document);
        let model = Self::build_model(&source, skin.as_ref(), Self::model_name(path));

        let clips = match Self::animations_for(&source, skin.as_ref(), path) {
            Ok(clips) => clips,
            Err(ViewerError::MissingSkin(name)) => {
                log::warn!("Animations in {name} have no skin to drive, skipping them");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(LoadedModel {
            path: path.to_path_buf(),
            model,
            clips,
        })
    }
}
