// Instructions panel state: at most one panel shown at a time

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "version", rename_all = "snake_case")]
pub enum PanelEvent {
    Hide(String),
    Show(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    shown: Option<String>,
}

impl PanelState {
    pub fn shown(&self) -> Option<&str> {
        self.shown.as_deref()
    }

    /// Show `version`'s panel, hiding the previous one. Selecting the panel that is
    /// already shown emits nothing.
    pub fn select(&mut self, version: &str) -> Vec<PanelEvent> {
        if self.shown.as_deref() == Some(version) {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(previous) = self.shown.take() {
            events.push(PanelEvent::Hide(previous));
        }
        self.shown = Some(version.to_string());
        events.push(PanelEvent::Show(version.to_string()));
        events
    }

    /// Hide whatever is shown and return to the initial state.
    pub fn clear(&mut self) -> Vec<PanelEvent> {
        self.shown.take().map(PanelEvent::Hide).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_nothing_shown() {
        assert_eq!(PanelState::default().shown(), None);
    }

    #[test]
    fn test_select_sequence() {
        let mut state = PanelState::default();

        assert_eq!(state.select("85"), vec![PanelEvent::Show("85".into())]);
        assert_eq!(state.select("85"), vec![]);
        assert_eq!(
            state.select("81"),
            vec![PanelEvent::Hide("85".into()), PanelEvent::Show("81".into())]
        );
        assert_eq!(state.shown(), Some("81"));
    }

    #[test]
    fn test_clear() {
        let mut state = PanelState::default();
        assert!(state.clear().is_empty());

        state.select("70");
        assert_eq!(state.clear(), vec![PanelEvent::Hide("70".into())]);
        assert_eq!(state.shown(), None);
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_string(&PanelEvent::Show("85".into())).unwrap();
        assert_eq!(json, r#"{"event":"show","version":"85"}"#);
    }
}
