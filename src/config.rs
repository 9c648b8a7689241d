use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::{core::Dimensions, error::CardResult};

/// Settings shared by every card rendered in one session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Final size of the written card.
    pub card_dimensions: Dimensions,
    /// Root of the reference assets (fonts, gradients, overlays).
    pub ref_dir: PathBuf,
    /// ImageMagick executable; `magick` selects the v7 `magick convert` form.
    pub magick_binary: String,
    /// Run ImageMagick inside this docker container.
    pub docker_container: Option<String>,
    /// Parent directory for intermediate images.
    pub temp_dir: Option<PathBuf>,
    /// Geometry of `-blur` for blurred cards.
    pub blur_profile: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            card_dimensions: Dimensions::card(),
            ref_dir: PathBuf::from("ref"),
            magick_binary: "convert".to_string(),
            docker_container: None,
            temp_dir: None,
            blur_profile: "0x60".to_string(),
        }
    }
}

impl RenderSettings {
    /// Load settings from a JSON file; absent fields keep their defaults.
    pub fn from_json_file(path: &Path) -> CardResult<Self> {
        let f = File::open(path).with_context(|| format!("open settings '{}'", path.display()))?;
        let settings: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse settings '{}'", path.display()))?;
        Ok(settings)
    }

    pub fn with_ref_dir(mut self, ref_dir: impl Into<PathBuf>) -> Self {
        self.ref_dir = ref_dir.into();
        self
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
