//! Italic alternate substitution (single-storey a, g and a descending f)

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::{Font, Layer};

/// An alternate chosen for a base glyph, with its drawing in the source master
#[derive(Debug, Clone)]
pub struct Resolved {
    pub name: String,
    pub layer: Option<Layer>,
}

/// Alternates available in one font for one source master
#[derive(Debug, Default)]
pub struct Alternates {
    resolved: HashMap<String, Resolved>,
}

impl Alternates {
    /// Pick, for every base glyph in the table, the first candidate the font contains
    pub fn resolve(font: &Font, table: &BTreeMap<String, Vec<String>>, source_id: &str) -> Self {
        let names: HashSet<&str> = font.glyphs.iter().map(|g| g.name.as_str()).collect();
        let mut resolved = HashMap::new();

        for (base, candidates) in table {
            let Some(name) = candidates.iter().find(|c| names.contains(c.as_str())) else {
                continue;
            };
            let layer = font
                .glyph(name)
                .and_then(|g| g.layer(source_id))
                .cloned();
            if layer.is_none() {
                log::warn!(
                    "Alternate '{}' for '{}' has no layer in the source master",
                    name,
                    base
                );
            }
            resolved.insert(
                base.clone(),
                Resolved {
                    name: name.clone(),
                    layer,
                },
            );
        }

        Self { resolved }
    }

    pub fn find(&self, base: &str) -> Option<&Resolved> {
        self.resolved.get(base)
    }

    /// Replace a layer's drawing with the alternate's
    ///
    /// Returns the alternate name when a substitution happened.
    pub fn substitute(&self, base: &str, layer: &mut Layer) -> Option<&str> {
        let resolved = self.find(base)?;
        let source = resolved.layer.as_ref()?;
        layer.replace_contents(source);
        Some(resolved.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}
