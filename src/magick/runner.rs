use std::{
    collections::{HashMap, VecDeque},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{
    config::RenderSettings,
    foundation::{
        core::Dimensions,
        error::{CardError, CardResult},
    },
    magick::command::{MagickCommand, absolute},
};

/// Seam between card builders and the external ImageMagick tool.
pub trait MagickRunner {
    /// Run a command whose only product is the file it writes.
    fn run(&mut self, cmd: &MagickCommand) -> CardResult<()>;

    /// Run a query command and return its combined stdout and stderr.
    fn run_get_output(&mut self, cmd: &MagickCommand) -> CardResult<String>;

    /// Pixel size of an image on disk.
    fn image_dimensions(&mut self, path: &Path) -> CardResult<Dimensions>;
}

/// Runs `convert` as a child process (no shell involved).
#[derive(Clone, Debug)]
pub struct ProcessRunner {
    program: String,
    prefix: Vec<String>,
}

impl ProcessRunner {
    pub fn new(settings: &RenderSettings) -> Self {
        let mut prefix = Vec::new();
        let program = match &settings.docker_container {
            Some(container) => {
                prefix.extend(["exec".to_string(), "-t".to_string(), container.clone()]);
                prefix.push(settings.magick_binary.clone());
                "docker".to_string()
            }
            None => settings.magick_binary.clone(),
        };
        if is_magick7(&settings.magick_binary) {
            prefix.push("convert".to_string());
        }
        Self { program, prefix }
    }

    fn command(&self, cmd: &MagickCommand) -> Command {
        let mut c = Command::new(&self.program);
        c.args(&self.prefix)
            .args(cmd.as_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        c
    }

    fn output(&self, cmd: &MagickCommand) -> CardResult<std::process::Output> {
        tracing::debug!(command = %cmd, "running imagemagick");
        self.command(cmd).output().map_err(|e| {
            CardError::magick(format!(
                "failed to spawn '{}' (is ImageMagick installed and on PATH?): {e}",
                self.program
            ))
        })
    }
}

impl MagickRunner for ProcessRunner {
    fn run(&mut self, cmd: &MagickCommand) -> CardResult<()> {
        let output = self.output(cmd)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CardError::magick(format!(
                "{} exited with status {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }

    fn run_get_output(&mut self, cmd: &MagickCommand) -> CardResult<String> {
        let output = self.output(cmd)?;
        if !output.status.success() {
            tracing::warn!(status = %output.status, "imagemagick query exited unsuccessfully");
        }
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }

    fn image_dimensions(&mut self, path: &Path) -> CardResult<Dimensions> {
        read_dimensions(path)
    }
}

/// Records commands instead of running them.
///
/// Queries are answered from queued canned outputs (empty once exhausted) and
/// image sizes from registered paths, a fallback size, or the file itself.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    commands: Vec<MagickCommand>,
    outputs: VecDeque<String>,
    dimensions: HashMap<PathBuf, Dimensions>,
    fallback: Option<Dimensions>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the output of the next query command.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.outputs.push_back(output.into());
        self
    }

    /// Report `dims` for the image at `path`.
    pub fn with_image(mut self, path: impl AsRef<Path>, dims: Dimensions) -> Self {
        self.dimensions.insert(absolute(path.as_ref()), dims);
        self
    }

    /// Report `dims` for any image that is neither registered nor readable.
    pub fn with_fallback_dimensions(mut self, dims: Dimensions) -> Self {
        self.fallback = Some(dims);
        self
    }

    pub fn commands(&self) -> &[MagickCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<MagickCommand> {
        self.commands
    }
}

impl MagickRunner for RecordingRunner {
    fn run(&mut self, cmd: &MagickCommand) -> CardResult<()> {
        self.commands.push(cmd.clone());
        Ok(())
    }

    fn run_get_output(&mut self, cmd: &MagickCommand) -> CardResult<String> {
        self.commands.push(cmd.clone());
        Ok(self.outputs.pop_front().unwrap_or_default())
    }

    fn image_dimensions(&mut self, path: &Path) -> CardResult<Dimensions> {
        if let Some(dims) = self.dimensions.get(&absolute(path)) {
            return Ok(*dims);
        }
        match (read_dimensions(path), self.fallback) {
            (Ok(dims), _) => Ok(dims),
            (Err(_), Some(dims)) => Ok(dims),
            (Err(e), None) => Err(e),
        }
    }
}

fn read_dimensions(path: &Path) -> CardResult<Dimensions> {
    let (width, height) = image::image_dimensions(path).map_err(|e| {
        CardError::metrics(format!("failed to read size of '{}': {e}", path.display()))
    })?;
    Ok(Dimensions::new(width, height))
}

fn is_magick7(binary: &str) -> bool {
    Path::new(binary)
        .file_stem()
        .is_some_and(|stem| stem.eq_ignore_ascii_case("magick"))
}

#[cfg(test)]
#[path = "../../tests/unit/magick/runner.rs"]
mod tests;
