use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;
use crate::italic::{MAX_ANGLE, MIN_ANGLE};
use crate::renderer::Renderer;
use crate::source;

/// List the slant presets
pub fn presets() -> Result<()> {
    let default = Settings::default().slant.preset;
    let mut markdown = Renderer::new().render_presets(default);
    markdown.push_str(&format!(
        "\n\nCustom angles must lie between {}° and {}°.",
        MIN_ANGLE, MAX_ANGLE
    ));

    crate::display::print_markdown(&markdown);
    Ok(())
}

/// List the masters of a font source
pub fn masters(input: PathBuf) -> Result<()> {
    let font = source::load(&input)?;
    crate::display::print_markdown(&Renderer::new().render_masters(&font));
    Ok(())
}
