//! Markdown terminal formatting using termimad

use termimad::{gray, MadSkin};

use crate::display::terminal::should_use_colors;

/// Print a Markdown report, styled when the terminal supports it
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        report_skin().print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

/// Skin for reports: slanted headings, highlighted glyph names
fn report_skin() -> MadSkin {
    use termimad::crossterm::style::{Attribute, Color::*};

    let mut skin = MadSkin::default();

    skin.headers[0].set_fg(Magenta);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[0].add_attr(Attribute::Italic);
    skin.headers[1].set_fg(Blue);
    skin.headers[1].add_attr(Attribute::Bold);

    // glyph names and the matrix
    skin.inline_code.set_fg(Yellow);
    skin.inline_code.set_bg(gray(3));

    skin.table.set_fg(Grey);
    skin.bold.set_fg(White);
    skin.italic.add_attr(Attribute::Italic);
    skin.bullet.set_fg(Magenta);

    skin
}
