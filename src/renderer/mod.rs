//! Markdown renderer module
//!
//! Generates the run summary of an italic build in Markdown format.
//! Renders sections: Summary, Substitutions, Next Steps.
//! Also renders the preset and master tables of the `show` commands.

use crate::config::SlantPreset;
use crate::italic::italic_name;
use crate::models::{Font, ItalicReport, Substitution};

/// Markdown renderer for italic build reports
pub struct Renderer {
    next_steps: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self { next_steps: true }
    }

    /// Leave out the next steps checklist (used for batch runs)
    pub fn without_next_steps(mut self) -> Self {
        self.next_steps = false;
        self
    }

    /// Render a complete report to Markdown
    pub fn render(&self, report: &ItalicReport) -> String {
        let mut output = String::new();

        output.push_str(&self.render_header(report));
        output.push_str("\n\n");

        output.push_str(&self.render_summary(report));
        output.push_str("\n\n");

        if !report.substitutions.is_empty() {
            output.push_str(&self.render_substitutions(&report.substitutions));
            output.push_str("\n\n");
        }

        if self.next_steps {
            output.push_str(&self.render_next_steps(report));
        }

        output.trim_end().to_string()
    }

    fn render_header(&self, report: &ItalicReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Italic Master: {}\n\n", report.master_name));
        output.push_str(&format!(
            "**Generated:** {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&format!("**Family:** {}", report.family_name));

        output
    }

    /// Render settings and counts as a table
    fn render_summary(&self, report: &ItalicReport) -> String {
        let [xx, xy, yx, yy, dx, dy] = report.matrix;
        let mut output = String::new();

        output.push_str("## Summary\n\n");
        output.push_str("| Setting | Value |\n");
        output.push_str("|---------|-------|\n");
        output.push_str(&format!("| Source master | {} |\n", report.source_master));
        output.push_str(&format!("| Angle | {}° |\n", report.angle));
        output.push_str(&format!(
            "| Compensation | {}% |\n",
            report.compensation_percent
        ));
        output.push_str(&format!(
            "| Matrix | `[{:.4}, {}, {:.4}, {}, {:.2}, {}]` |\n",
            xx, xy, yx, yy, dx, dy
        ));
        output.push_str(&format!("| Processed | {} |\n", report.processed));
        output.push_str(&format!("| Substituted | {} |\n", report.substituted()));
        output.push_str(&format!("| Cleanup | {} |\n", yes_no(report.cleanup)));
        output.push_str(&format!("| Pixel grid | {} |", yes_no(report.snapped)));

        output
    }

    fn render_substitutions(&self, substitutions: &[Substitution]) -> String {
        let mut output = String::new();

        output.push_str("## Substitutions\n\n");
        for sub in substitutions {
            output.push_str(&format!("- `{}` → `{}`\n", sub.glyph, sub.alternate));
        }

        output
    }

    fn render_next_steps(&self, report: &ItalicReport) -> String {
        let mut output = String::new();

        output.push_str("## Next Steps\n\n");
        output.push_str("1. Check stem weights in H and O\n");
        output.push_str("2. Adjust sidebearings and spacing\n");
        output.push_str("3. Fix curve distortions by hand\n");
        if report.source_master.contains("Bold") {
            output.push_str("4. Run on the remaining masters with the same settings\n");
        } else {
            output.push_str("4. Run on the Bold master with the same settings\n");
        }

        output
    }

    /// Render the slant preset table
    pub fn render_presets(&self, default: SlantPreset) -> String {
        let mut output = String::new();

        output.push_str("# Slant Presets\n\n");
        output.push_str("| Preset | Angle | Ratio |\n");
        output.push_str("|--------|-------|-------|\n");
        for preset in SlantPreset::ALL {
            let angle = preset
                .angle()
                .map_or_else(|| "`slant.angle`".to_string(), |a| format!("{}°", a));
            let ratio = preset
                .ratio()
                .map_or_else(|| "-".to_string(), |r| format!("1:{}", r));
            let marker = if preset == default { " (default)" } else { "" };
            output.push_str(&format!(
                "| {}{} | {} | {} |\n",
                preset, marker, angle, ratio
            ));
        }

        output.trim_end().to_string()
    }

    /// Render the masters of a font with the italic each would produce
    pub fn render_masters(&self, font: &Font) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Masters: {}\n\n", font.family_name));
        output.push_str("| Name | Id | Italic angle | Italic |\n");
        output.push_str("|------|----|--------------|--------|\n");
        for master in &font.masters {
            let italic = if master.name.contains("Italic") {
                "-".to_string()
            } else {
                let name = italic_name(&master.name);
                if font.master_by_name(&name).is_some() {
                    format!("{} (exists)", name)
                } else {
                    name
                }
            };
            output.push_str(&format!(
                "| {} | `{}` | {}° | {} |\n",
                master.name, master.id, master.italic_angle, italic
            ));
        }

        output.trim_end().to_string()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
