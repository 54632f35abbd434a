//! Presentation adapter seam
//!
//! The simulation never touches a canvas or the DOM. It talks to the outside
//! through this trait: a frame render after every tick, overlay changes on
//! phase transitions, and scoreboard updates. The adapter reads session state
//! and has no way to write it back.

/// Overlay surfaces the games ask the adapter to show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Start/menu screen (character or grade selection included).
    Start,
    /// Frozen-frame pause overlay.
    Pause,
    /// Quiz question / answer entry overlay.
    Question,
    /// Penalty cooldown overlay with a visible countdown.
    Penalty,
    /// Milestone victory overlay offering continue-or-stop.
    Victory,
    /// Final score screen.
    GameOver,
}

/// What a game needs from its presentation layer.
pub trait Presenter {
    /// Redraw the playfield from current session state.
    fn render(&mut self);
    fn show_overlay(&mut self, kind: OverlayKind);
    fn hide_overlay(&mut self, kind: OverlayKind);
    fn update_scoreboard(&mut self, score: u32, lives: u8);
}

/// Presenter that does nothing. Used by tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&mut self) {}
    fn show_overlay(&mut self, _kind: OverlayKind) {}
    fn hide_overlay(&mut self, _kind: OverlayKind) {}
    fn update_scoreboard(&mut self, _score: u32, _lives: u8) {}
}

/// Reconcile the visible overlay with the current phase.
///
/// Hides the previously shown overlay and shows the new one when they
/// differ; returns the overlay now visible so the driver can carry it to the
/// next tick.
pub fn sync_overlay<P: Presenter>(
    shown: Option<OverlayKind>,
    wanted: Option<OverlayKind>,
    presenter: &mut P,
) -> Option<OverlayKind> {
    if shown == wanted {
        return shown;
    }
    if let Some(old) = shown {
        presenter.hide_overlay(old);
    }
    if let Some(new) = wanted {
        presenter.show_overlay(new);
    }
    wanted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        shown: Vec<OverlayKind>,
        hidden: Vec<OverlayKind>,
    }

    impl Presenter for Recorder {
        fn render(&mut self) {}
        fn show_overlay(&mut self, kind: OverlayKind) {
            self.shown.push(kind);
        }
        fn hide_overlay(&mut self, kind: OverlayKind) {
            self.hidden.push(kind);
        }
        fn update_scoreboard(&mut self, _score: u32, _lives: u8) {}
    }

    #[test]
    fn overlay_transition_hides_then_shows() {
        let mut rec = Recorder::default();
        let shown = sync_overlay(Some(OverlayKind::Start), Some(OverlayKind::Question), &mut rec);
        assert_eq!(shown, Some(OverlayKind::Question));
        assert_eq!(rec.hidden, vec![OverlayKind::Start]);
        assert_eq!(rec.shown, vec![OverlayKind::Question]);
    }

    #[test]
    fn unchanged_overlay_is_untouched() {
        let mut rec = Recorder::default();
        let shown = sync_overlay(Some(OverlayKind::Pause), Some(OverlayKind::Pause), &mut rec);
        assert_eq!(shown, Some(OverlayKind::Pause));
        assert!(rec.shown.is_empty() && rec.hidden.is_empty());
    }

    #[test]
    fn clearing_overlay_only_hides() {
        let mut rec = Recorder::default();
        let shown = sync_overlay(Some(OverlayKind::GameOver), None, &mut rec);
        assert_eq!(shown, None);
        assert_eq!(rec.hidden, vec![OverlayKind::GameOver]);
        assert!(rec.shown.is_empty());
    }
}
