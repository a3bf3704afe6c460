use serde::Deserialize;

/// html entity for U+2011, what the page has always written into the textarea
pub const NON_BREAKING_HYPHEN_ENTITY: &str = "&#8209;";
pub const NON_BREAKING_HYPHEN: char = '\u{2011}';

/// How the non-breaking hyphen gets written into the surface.
/// Entity is the default since the surface interprets markup anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphForm {
    #[default]
    Entity,
    Character,
}

impl GlyphForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlyphForm::Entity => NON_BREAKING_HYPHEN_ENTITY,
            GlyphForm::Character => "\u{2011}",
        }
    }
}

/// swap every '-' for a non-breaking hyphen so flags never wrap mid-token
pub fn to_display(text: &str, form: GlyphForm) -> String {
    text.replace('-', form.as_str())
}

/// Undo `to_display` on text read back from the surface.
///
/// Browsers hand back either the raw U+2011 char or the entity depending on
/// how the content was read, so both are mapped. Newlines become spaces
/// since the analyser wants a single line.
pub fn from_display(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace('\n', " ")
        .replace(NON_BREAKING_HYPHEN_ENTITY, "-")
        .replace(NON_BREAKING_HYPHEN, "-")
}

pub fn count_glyphs(text: &str, form: GlyphForm) -> usize {
    text.matches(form.as_str()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_display_replaces_every_hyphen() {
        let out = to_display("-a --b c-d", GlyphForm::Entity);
        assert_eq!(out, "&#8209;a &#8209;&#8209;b c&#8209;d");
        assert!(!out.contains('-'));
    }

    #[test]
    fn test_to_display_character_form() {
        let out = to_display("-Xmx8g", GlyphForm::Character);
        assert_eq!(out, "\u{2011}Xmx8g");
        assert_eq!(out.chars().count(), "-Xmx8g".chars().count());
    }

    #[test]
    fn test_to_display_without_hyphens_is_untouched() {
        assert_eq!(to_display("java Main", GlyphForm::Entity), "java Main");
        assert_eq!(to_display("", GlyphForm::Entity), "");
    }

    #[test]
    fn test_from_display_handles_entity_and_char() {
        assert_eq!(from_display("&#8209;Xmx8g \u{2011}Xmx4g"), "-Xmx8g -Xmx4g");
    }

    #[test]
    fn test_from_display_flattens_lines() {
        assert_eq!(from_display("java\n&#8209;cp\r\nfoo"), "java -cp foo");
    }

    #[test]
    fn test_glyph_form_from_json() {
        let form: GlyphForm = serde_json::from_str("\"character\"").unwrap();
        assert_eq!(form, GlyphForm::Character);
        assert!(serde_json::from_str::<GlyphForm>("\"Entity\"").is_err());
    }

    #[test]
    fn test_count_glyphs() {
        let out = to_display("-a -b -c", GlyphForm::Entity);
        assert_eq!(count_glyphs(&out, GlyphForm::Entity), 3);
        assert_eq!(count_glyphs(&out, GlyphForm::Character), 0);
    }
}
