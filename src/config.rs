use crate::glyph::GlyphForm;
use serde::Deserialize;

/// id of the textarea on the inspect page
pub const DEFAULT_TARGET_ID: &str = "form_ta";

/// Options the page can pass when it builds a panel.
/// Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    pub target_id: String,
    pub glyph: GlyphForm,
    /// per-call debug lines in the console
    pub verbose: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            target_id: DEFAULT_TARGET_ID.to_string(),
            glyph: GlyphForm::default(),
            verbose: false,
        }
    }
}

impl PanelConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid panel options: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = PanelConfig::default();
        assert_eq!(cfg.target_id, "form_ta");
        assert_eq!(cfg.glyph, GlyphForm::Entity);
        assert!(!cfg.verbose);
    }

    #[test]
    fn test_from_json_partial() {
        let cfg = PanelConfig::from_json(r#"{"glyph": "character"}"#).unwrap();
        assert_eq!(cfg.glyph, GlyphForm::Character);
        assert_eq!(cfg.target_id, "form_ta");
    }

    #[test]
    fn test_from_json_full() {
        let cfg = PanelConfig::from_json(r#"{"target_id": "cmd", "glyph": "entity", "verbose": true}"#).unwrap();
        assert_eq!(cfg.target_id, "cmd");
        assert!(cfg.verbose);
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(PanelConfig::from_json("{}").unwrap(), PanelConfig::default());
    }

    #[test]
    fn test_from_json_rejects_bad_glyph() {
        let err = PanelConfig::from_json(r#"{"glyph": "dash"}"#).unwrap_err();
        assert!(err.starts_with("invalid panel options"));
    }

    #[test]
    fn test_from_json_rejects_unknown_field() {
        assert!(PanelConfig::from_json(r#"{"target": "x"}"#).is_err());
    }
}
