use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A glyph whose drawing was replaced by an italic alternate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub glyph: String,
    pub alternate: String,
}

/// Outcome of building one italic master
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItalicReport {
    /// Family of the processed font
    pub family_name: String,
    /// Name of the upright master the italic was derived from
    pub source_master: String,
    /// Name of the created master
    pub master_name: String,
    /// Id of the created master
    pub master_id: String,
    /// Slant angle in degrees
    pub angle: f64,
    /// Horizontal stem compensation in percent
    pub compensation_percent: f64,
    /// Applied transform `[xx, xy, yx, yy, dx, dy]`
    pub matrix: [f64; 6],
    /// Number of layers that were transformed
    pub processed: usize,
    /// Alternates substituted before transforming
    pub substitutions: Vec<Substitution>,
    /// Whether extremes, cleanup and direction correction ran
    pub cleanup: bool,
    /// Whether coordinates were snapped to the grid
    pub snapped: bool,
    /// When the master was built
    pub generated_at: DateTime<Utc>,
}

impl ItalicReport {
    pub fn substituted(&self) -> usize {
        self.substitutions.len()
    }

    /// Check if any glyph was actually changed
    pub fn has_changes(&self) -> bool {
        self.processed > 0 || !self.substitutions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ItalicReport {
        ItalicReport {
            family_name: "Test Sans".to_string(),
            source_master: "Regular".to_string(),
            master_name: "Italic".to_string(),
            master_id: "id".to_string(),
            angle: 11.3,
            compensation_percent: 2.0,
            matrix: [1.02, 0.0, 0.2, 1.0, 0.0, 0.0],
            processed: 0,
            substitutions: vec![],
            cleanup: true,
            snapped: false,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_report_has_changes() {
        let mut report = report();
        assert!(!report.has_changes());

        report.substitutions.push(Substitution {
            glyph: "a".to_string(),
            alternate: "a.ss01".to_string(),
        });
        assert!(report.has_changes());
        assert_eq!(report.substituted(), 1);
    }

    #[test]
    fn test_report_serialization() {
        let json = serde_json::to_string(&report()).unwrap();
        let parsed: ItalicReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.master_name, "Italic");
        assert_eq!(parsed.matrix[0], 1.02);
    }
}
