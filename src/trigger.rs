use crate::controller::DisplayController;
use crate::surface::DisplaySurface;

pub type TriggerResult = Result<Trigger, String>;

/// The two buttons on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Clear,
    ShowExample,
}

impl Trigger {
    // old page handler names still accepted
    pub fn from_name(name: &str) -> TriggerResult {
        match name.trim() {
            "clear" | "clearTextArea" => Ok(Trigger::Clear),
            "example" | "showExample" => Ok(Trigger::ShowExample),
            "" => Err("no trigger given".to_string()),
            other => Err(format!("Trigger not found: {}", other)),
        }
    }

    pub fn names() -> Vec<&'static str> {
        vec!["clear", "example"]
    }

    pub fn fire<S: DisplaySurface>(&self, controller: &mut DisplayController<S>) {
        match self {
            Trigger::Clear => controller.clear(),
            Trigger::ShowExample => controller.show_example(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::BufferSurface;

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(Trigger::from_name("clear"), Ok(Trigger::Clear));
        assert_eq!(Trigger::from_name("clearTextArea"), Ok(Trigger::Clear));
        assert_eq!(Trigger::from_name("example"), Ok(Trigger::ShowExample));
        assert_eq!(Trigger::from_name(" showExample "), Ok(Trigger::ShowExample));
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Trigger::from_name("submit"), Err("Trigger not found: submit".to_string()));
        assert!(Trigger::from_name("  ").is_err());
    }

    #[test]
    fn test_fire_sequence() {
        let mut ctl = DisplayController::new(BufferSurface::with_content("old text"));
        Trigger::ShowExample.fire(&mut ctl);
        assert!(ctl.surface().as_str().contains("&#8209;Xmx4g"));
        Trigger::Clear.fire(&mut ctl);
        assert_eq!(ctl.surface().as_str(), "");
    }

    #[test]
    fn test_names_resolve() {
        for name in Trigger::names() {
            assert!(Trigger::from_name(name).is_ok());
        }
    }
}
