use std::path::Path;

use crate::{
    cards::base::{CardFields, CardType, RenderContext},
    config::RenderSettings,
    foundation::error::CardResult,
    magick::{command::MagickCommand, runner::RecordingRunner},
};

pub(crate) fn settings() -> RenderSettings {
    RenderSettings::default().with_ref_dir("/ref")
}

pub(crate) fn fields(title: &str) -> CardFields {
    CardFields::new("/src/source.jpg", "/out/card.jpg", title)
}

pub(crate) fn try_render(
    card: &dyn CardType,
    settings: &RenderSettings,
    mut runner: RecordingRunner,
) -> CardResult<Vec<MagickCommand>> {
    let mut ctx = RenderContext::new(&mut runner, settings);
    card.create(&mut ctx)?;
    Ok(runner.into_commands())
}

pub(crate) fn render(card: &dyn CardType, runner: RecordingRunner) -> Vec<MagickCommand> {
    try_render(card, &settings(), runner).unwrap()
}

/// Write a transparent PNG of the given size.
pub(crate) fn write_png(path: &Path, width: u32, height: u32) {
    image::RgbaImage::new(width, height).save(path).unwrap();
}
