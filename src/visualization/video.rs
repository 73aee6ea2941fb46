//! Video assembly from recorded snapshots
//!
//! Streams raw RGBA rasters for every recorded snapshot into a spawned
//! `ffmpeg` process; the fps used for the run doubles as the playback
//! frame rate. The no-state-recorded check runs before any process is
//! spawned.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::SimError;
use crate::visualization::frame::{StateImage, FRAME_HEIGHT, FRAME_WIDTH};

/// Encode every recorded snapshot, in order, into a video at `path`.
/// Fails with `NoStateRecorded` when the frame sequence is empty.
pub fn generate_video<S: StateImage>(sim: &S, path: &Path, fps: usize) -> Result<(), SimError> {
    let count = sim.frame_count();
    if count == 0 {
        return Err(SimError::NoStateRecorded);
    }

    let mut child = Command::new("ffmpeg")
        .args(["-y", "-loglevel", "error", "-f", "rawvideo", "-pixel_format", "rgba"])
        .arg("-video_size")
        .arg(format!("{}x{}", FRAME_WIDTH, FRAME_HEIGHT))
        .arg("-framerate")
        .arg(fps.to_string())
        .args(["-i", "-", "-pix_fmt", "yuv420p"])
        .arg(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| SimError::VideoEncoder(format!("failed to launch ffmpeg: {e}")))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| SimError::VideoEncoder("ffmpeg stdin unavailable".into()))?;

    let bar = ProgressBar::new(count as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({eta}) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    bar.set_message("encoding video");

    for i in 0..count {
        let frame = sim.state_image(i)?;
        stdin.write_all(&frame)?;
        bar.inc(1);
    }

    // Close the pipe so the encoder sees EOF and finalizes the file
    drop(stdin);

    let status = child.wait()?;
    if !status.success() {
        return Err(SimError::VideoEncoder(format!(
            "ffmpeg exited with {status}"
        )));
    }

    bar.finish_with_message("video complete");
    Ok(())
}
