//! Plays the first animation clip of a model without a window and logs the
//! resolved skeleton and draw calls of each frame.
//!
//! ```text
//! pose_dump <model.glb|model.gltf> [frames] [settings.json]
//! ```

use anyhow::Context;
use glam::Vec3;
use rigview::{DrawList, GltfLoader, Input, ViewerSession, ViewerSettings};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        anyhow::bail!("usage: pose_dump <model.glb|model.gltf> [frames] [settings.json]");
    };
    let frames: usize = args
        .next()
        .map(|s| s.parse())
        .transpose()
        .context("frame count must be a number")?
        .unwrap_or(10);
    let settings = match args.next() {
        Some(file) => ViewerSettings::load(&file).with_context(|| format!("failed to read {file}"))?,
        None => ViewerSettings::default(),
    };

    let window = settings.window;
    let mut session = ViewerSession::new(settings);
    session.wireframe = true;

    session
        .load_model(&path, &GltfLoader::new())
        .with_context(|| format!("failed to load {path}"))?;

    for (label, index) in session.clip_options() {
        log::info!("Clip option {index}: {label}");
    }

    let input = Input::with_screen_size(window.width, window.height);
    let dt = 1.0 / session.target_fps() as f32;
    let mut draw_list = DrawList::new();

    for step in 0..frames {
        session.update(&input, dt);

        draw_list.clear();
        session.draw(&mut draw_list)?;

        let lines = draw_list.lines().count();

        match (session.current_frame(), session.current_pose()?) {
            (Some(frame), Some(pose)) => {
                let (min, max) = pose.bounds().unwrap_or((Vec3::ZERO, Vec3::ZERO));
                log::info!(
                    "step {step}: frame {frame}, {} joints, {} links, bounds {min} .. {max}, {} draw calls ({lines} lines)",
                    pose.joints.len(),
                    pose.segments.len(),
                    draw_list.len(),
                );
            }
            _ => log::info!("step {step}: no animation, {} draw calls", draw_list.len()),
        }
    }

    Ok(())
}
