use serde::{Deserialize, Serialize};

use super::outline::{Anchor, Component, Path};

/// A font source with one or more design masters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Font {
    pub family_name: String,
    #[serde(default = "default_upm")]
    pub units_per_em: u16,
    pub masters: Vec<Master>,
    #[serde(default)]
    pub glyphs: Vec<Glyph>,
}

fn default_upm() -> u16 {
    1000
}

/// A named design variant (e.g. Regular, Bold Italic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Master {
    pub id: String,
    pub name: String,
    /// Negative values slant to the right
    #[serde(default)]
    pub italic_angle: f64,
}

/// A glyph with one layer per master
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Glyph {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unicode: Option<String>,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

/// The outlines of one glyph in one master
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub master_id: String,
    pub width: f64,
    #[serde(default)]
    pub paths: Vec<Path>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anchors: Vec<Anchor>,
}

impl Font {
    /// Find a master by id, falling back to its name
    pub fn master(&self, id_or_name: &str) -> Option<&Master> {
        self.masters
            .iter()
            .find(|m| m.id == id_or_name)
            .or_else(|| self.masters.iter().find(|m| m.name == id_or_name))
    }

    pub fn master_by_name(&self, name: &str) -> Option<&Master> {
        self.masters.iter().find(|m| m.name == name)
    }

    pub fn glyph(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.iter().find(|g| g.name == name)
    }
}

impl Glyph {
    pub fn layer(&self, master_id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.master_id == master_id)
    }
}

impl Layer {
    /// A layer with neither paths nor components draws nothing
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.components.is_empty()
    }

    /// Replace the drawing of this layer with a copy of another layer's
    pub fn replace_contents(&mut self, other: &Layer) {
        self.paths = other.paths.clone();
        self.components = other.components.clone();
        self.anchors = other.anchors.clone();
        self.width = other.width;
    }
}

#[cfg(test)]
impl Layer {
    pub fn new(master_id: impl Into<String>, width: f64) -> Self {
        Self {
            master_id: master_id.into(),
            width,
            paths: Vec::new(),
            components: Vec::new(),
            anchors: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::outline::Node;

    fn font() -> Font {
        Font {
            family_name: "Test Sans".to_string(),
            units_per_em: 1000,
            masters: vec![
                Master {
                    id: "m01".to_string(),
                    name: "Regular".to_string(),
                    italic_angle: 0.0,
                },
                Master {
                    id: "Bold".to_string(),
                    name: "Heavy".to_string(),
                    italic_angle: 0.0,
                },
            ],
            glyphs: vec![Glyph {
                name: "a".to_string(),
                unicode: Some("0061".to_string()),
                layers: vec![Layer::new("m01", 500.0)],
            }],
        }
    }

    #[test]
    fn test_master_lookup_prefers_id() {
        let font = font();
        assert_eq!(font.master("m01").unwrap().name, "Regular");
        assert_eq!(font.master("Regular").unwrap().id, "m01");
        assert_eq!(font.master("Bold").unwrap().name, "Heavy");
        assert!(font.master("Black").is_none());
    }

    #[test]
    fn test_glyph_layer_lookup() {
        let font = font();
        let glyph = font.glyph("a").unwrap();
        assert!(glyph.layer("m01").is_some());
        assert!(glyph.layer("Bold").is_none());
        assert!(font.glyph("b").is_none());
    }

    #[test]
    fn test_layer_replace_contents() {
        let mut layer = Layer::new("m01", 500.0);
        let mut other = Layer::new("m01", 540.0);
        other.paths.push(Path::closed(vec![
            Node::line(0.0, 0.0),
            Node::line(100.0, 0.0),
            Node::line(100.0, 100.0),
        ]));

        assert!(layer.is_empty());
        layer.replace_contents(&other);
        assert!(!layer.is_empty());
        assert_eq!(layer.width, 540.0);
        assert_eq!(layer.master_id, "m01");
    }

    #[test]
    fn test_font_deserialization_defaults() {
        let font: Font = serde_json::from_str(
            r#"{"family_name":"X","masters":[{"id":"a","name":"Regular"}]}"#,
        )
        .unwrap();
        assert_eq!(font.units_per_em, 1000);
        assert_eq!(font.masters[0].italic_angle, 0.0);
        assert!(font.glyphs.is_empty());
    }
}
