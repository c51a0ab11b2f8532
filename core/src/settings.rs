use serde::{Deserialize, Serialize};

use crate::*;

/// Where a gesture's action comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    /// The secondary mouse button marks, everything else reveals.
    RightClick,
    /// Every gesture uses the externally chosen [`Settings::toggle_action`].
    Toggle,
}

impl Default for InteractionMode {
    fn default() -> Self {
        Self::Toggle
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub interaction_mode: InteractionMode,
    pub toggle_action: Action,
    pub color_match: ColorMatch,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interaction_mode: InteractionMode::default(),
            toggle_action: Action::Reveal,
            color_match: ColorMatch::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| PuzzleError::InvalidSettings(err.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| PuzzleError::InvalidSettings(err.to_string()))
    }

    /// Action a gesture starting with `input` performs; only consulted at gesture start.
    pub fn resolve_action(&self, input: PointerInput) -> Action {
        use InteractionMode::*;
        match (self.interaction_mode, input) {
            (Toggle, _) => self.toggle_action,
            (RightClick, PointerInput::Mouse(buttons)) if buttons.contains(MouseButtons::RIGHT) => {
                Action::Mark
            }
            (RightClick, _) => Action::Reveal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = Settings::from_json(r#"{"interaction_mode":"RightClick"}"#).unwrap();

        assert_eq!(settings.interaction_mode, InteractionMode::RightClick);
        assert_eq!(settings.toggle_action, Action::Reveal);
        assert_eq!(settings.color_match, ColorMatch::TRANSPARENT);
    }

    #[test]
    fn json_round_trip_keeps_color_match_compact() {
        let settings = Settings {
            interaction_mode: InteractionMode::Toggle,
            toggle_action: Action::Mark,
            color_match: "255,255,255,*".parse().unwrap(),
        };

        let json = settings.to_json().unwrap();
        assert!(json.contains(r#""color_match":"255,255,255,*""#), "{json}");
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = Settings::from_json(r#"{"color_match":"*,*"}"#).unwrap_err();

        assert!(matches!(err, PuzzleError::InvalidSettings(_)), "{err}");
    }

    #[test]
    fn right_click_mode_marks_with_secondary_button() {
        let settings = Settings {
            interaction_mode: InteractionMode::RightClick,
            ..Default::default()
        };

        let right = PointerInput::Mouse(MouseButtons::RIGHT);
        let left = PointerInput::Mouse(MouseButtons::LEFT);
        let touch = PointerInput::Touch { touches: 1 };

        assert_eq!(settings.resolve_action(right), Action::Mark);
        assert_eq!(settings.resolve_action(left), Action::Reveal);
        assert_eq!(settings.resolve_action(touch), Action::Reveal);
    }

    #[test]
    fn toggle_mode_ignores_the_button() {
        let settings = Settings {
            toggle_action: Action::Mark,
            ..Default::default()
        };

        assert_eq!(
            settings.resolve_action(PointerInput::Mouse(MouseButtons::LEFT)),
            Action::Mark
        );
        assert_eq!(
            settings.resolve_action(PointerInput::Touch { touches: 1 }),
            Action::Mark
        );
    }
}
