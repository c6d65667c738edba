use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::{self, Settings, DEFAULT_CONFIG};
use crate::error::Result;
use crate::italic::ItalicBuilder;
use crate::models::ItalicReport;
use crate::renderer::Renderer;
use crate::source;

/// Generate an italic from the first master of every font source in a directory
pub fn run(dir: PathBuf, config_path: Option<PathBuf>, output_dir: Option<PathBuf>) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let settings = config::load_or_default(&config_path)?;

    let sources = find_sources(&dir);
    if sources.is_empty() {
        println!("No font sources found in: {}", dir.display());
        return Ok(());
    }

    let renderer = Renderer::new().without_next_steps();
    let mut written = 0;
    for input in &sources {
        let output = output_path(input, &dir, output_dir.as_deref());

        match process(input, &output, &settings) {
            Ok(report) => {
                crate::display::print_markdown(&renderer.render(&report));
                println!("Font written to: {}\n", output.display());
                written += 1;
            }
            Err(e) => log::warn!("Skipping {}: {}", input.display(), e),
        }
    }

    println!(
        "Generated {} of {} italic masters",
        written,
        sources.len()
    );
    Ok(())
}

fn process(input: &Path, output: &Path, settings: &Settings) -> Result<ItalicReport> {
    let mut font = source::load(input)?;
    let first = font.masters[0].id.clone();
    let report = ItalicBuilder::new(settings).build(&mut font, &first)?;
    source::save(&font, output)?;
    Ok(report)
}

/// Where the italic of `input` goes: next to it, or at the same relative
/// location under `output_dir`
fn output_path(input: &Path, dir: &Path, output_dir: Option<&Path>) -> PathBuf {
    let italic = source::italic_path(input);
    let Some(out) = output_dir else {
        return italic;
    };
    match italic.strip_prefix(dir) {
        Ok(relative) => out.join(relative),
        Err(_) => out.join(italic.file_name().unwrap_or_default()),
    }
}

/// Font sources below `dir`, in a stable order
fn find_sources(dir: &Path) -> Vec<PathBuf> {
    let mut sources: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| source::is_source_file(p))
        .collect();
    sources.sort();
    sources
}
