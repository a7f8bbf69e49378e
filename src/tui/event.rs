//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI
//! refresh. All state mutations happen synchronously inside
//! [`handle_key_event`] or the app's tick handler, in dispatch order:
//! nothing here suspends mid-mutation.

use crate::tui::app::App;
use crate::{Direction, ViewId};
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyModifiers,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh and feed scheduling.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a
    /// tick.
    ///
    /// Uses `tokio::select!` to race between crossterm input and the
    /// tick timer.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) => return Ok(Event::Key(key)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore mouse, focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No loop-level action; any state change already happened.
    None,
    /// Quit the application.
    Quit,
}

/// Handles a key event by dispatching to the appropriate app method.
///
/// When the add-widget picker is open, keys are routed to it
/// exclusively. Otherwise a single keymap applies, with `j`/`k` and the
/// toggle keys resolved against whichever mode is active.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    // Global: quit always works
    match key.code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Action::Quit,
        _ => {}
    }

    // Picker keys take precedence over everything else while it is open.
    if app.picker_open {
        return handle_picker_key(app, key);
    }

    match key.code {
        KeyCode::Esc => {
            if app.sidebar_editing {
                app.sidebar_editing = false;
            } else if app.grid_editing {
                app.grid_editing = false;
            }
        }
        KeyCode::Char(c @ '1'..='7') => {
            let idx = (c as u8 - b'1') as usize;
            app.switch_view(ViewId::ALL[idx]);
        }
        KeyCode::Tab => app.switch_view(app.current_view.next()),
        KeyCode::BackTab => app.switch_view(app.current_view.previous()),
        KeyCode::Char('b') => app.layouts.toggle_sidebar(app.current_view),
        KeyCode::Char('e') => app.toggle_sidebar_editing(),
        KeyCode::Char('g') if app.current_view == ViewId::Dashboard => {
            app.grid_editing = !app.grid_editing;
            app.grid_cursor = 0;
        }
        KeyCode::Char('a') if app.sidebar_editing => app.open_picker(),
        KeyCode::Char('x') if app.sidebar_editing => app.sidebar_remove_selected(),
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Char('J') if app.grid_editing => app.grid_move(Direction::Down),
        KeyCode::Char('K') if app.grid_editing => app.grid_move(Direction::Up),
        KeyCode::Char(' ') | KeyCode::Enter => app.activate_selection(),
        KeyCode::Char('m') if app.current_view == ViewId::Comms => {
            app.voice_active = !app.voice_active;
        }
        KeyCode::Char('v') if app.current_view == ViewId::Tasks => {
            app.tasks_graph_mode = !app.tasks_graph_mode;
        }
        KeyCode::F(n @ 1..=4) => app.fire_quick_action((n - 1) as usize),
        _ => {}
    }
    Action::None
}

/// Handles key events while the add-widget picker is open.
fn handle_picker_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => app.picker_open = false,
        KeyCode::Char('j') | KeyCode::Down => app.picker_next(),
        KeyCode::Char('k') | KeyCode::Up => app.picker_previous(),
        KeyCode::Enter => app.picker_add_selected(),
        _ => {}
    }
    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ViewId, WidgetKind};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::for_tests()
    }

    // -- Quit --

    #[test]
    fn test_q_quits() {
        let mut app = test_app();
        assert_eq!(handle_key_event(&mut app, key(KeyCode::Char('q'))), Action::Quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = test_app();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&mut app, event), Action::Quit);
    }

    // -- View switching --

    #[test]
    fn test_number_keys_switch_views() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.current_view, ViewId::Tasks);
        handle_key_event(&mut app, key(KeyCode::Char('7')));
        assert_eq!(app.current_view, ViewId::Settings);
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.current_view, ViewId::Agents);
        handle_key_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.current_view, ViewId::Dashboard);
    }

    #[test]
    fn test_switching_view_leaves_sidebar_edit_mode() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('e')));
        assert!(app.sidebar_editing);
        handle_key_event(&mut app, key(KeyCode::Char('2')));
        assert!(!app.sidebar_editing);
    }

    // -- Sidebar visibility and edit mode --

    #[test]
    fn test_b_toggles_sidebar_for_current_view_only() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('b')));
        assert!(!app.layouts.sidebar_visible(ViewId::Dashboard));
        assert!(app.layouts.sidebar_visible(ViewId::Agents));
    }

    #[test]
    fn test_e_enters_and_esc_leaves_sidebar_edit() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('e')));
        assert!(app.sidebar_editing);
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.sidebar_editing);
    }

    #[test]
    fn test_x_removes_selected_widget_first_match() {
        let mut app = test_app();
        // dashboard default: [quick-actions, system-log, voice-uplink]
        handle_key_event(&mut app, key(KeyCode::Char('e')));
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert_eq!(
            app.layouts.widgets(ViewId::Dashboard),
            &[WidgetKind::QuickActions, WidgetKind::VoiceUplink]
        );
    }

    #[test]
    fn test_x_outside_edit_mode_is_inert() {
        let mut app = test_app();
        let before = app.layouts.widgets(ViewId::Dashboard).to_vec();
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.layouts.widgets(ViewId::Dashboard), before.as_slice());
    }

    // -- Picker --

    #[test]
    fn test_picker_add_appends_selected_kind() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('e')));
        handle_key_event(&mut app, key(KeyCode::Char('a')));
        assert!(app.picker_open);
        // catalog order starts at quick-actions; move to system-log.
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(!app.picker_open);
        assert_eq!(
            app.layouts.widgets(ViewId::Dashboard).last(),
            Some(&WidgetKind::SystemLog)
        );
    }

    #[test]
    fn test_picker_allows_duplicate_selection() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('e')));
        for _ in 0..2 {
            handle_key_event(&mut app, key(KeyCode::Char('a')));
            handle_key_event(&mut app, key(KeyCode::Enter));
        }
        // quick-actions was already mounted; now there are three.
        let count = app
            .layouts
            .widgets(ViewId::Dashboard)
            .iter()
            .filter(|w| **w == WidgetKind::QuickActions)
            .count();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_picker_esc_closes_without_adding() {
        let mut app = test_app();
        let before = app.layouts.widgets(ViewId::Dashboard).len();
        handle_key_event(&mut app, key(KeyCode::Char('e')));
        handle_key_event(&mut app, key(KeyCode::Char('a')));
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.picker_open);
        assert_eq!(app.layouts.widgets(ViewId::Dashboard).len(), before);
    }

    #[test]
    fn test_picker_swallows_view_switch_keys() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('e')));
        handle_key_event(&mut app, key(KeyCode::Char('a')));
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.current_view, ViewId::Dashboard);
    }

    // -- Grid edit mode --

    #[test]
    fn test_g_only_works_on_dashboard() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('2')));
        handle_key_event(&mut app, key(KeyCode::Char('g')));
        assert!(!app.grid_editing);
        handle_key_event(&mut app, key(KeyCode::Char('1')));
        handle_key_event(&mut app, key(KeyCode::Char('g')));
        assert!(app.grid_editing);
    }

    #[test]
    fn test_grid_move_down_swaps_and_cursor_follows() {
        use crate::SectionId;
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('g')));
        handle_key_event(&mut app, key(KeyCode::Char('J')));
        let order: Vec<SectionId> = app.grid.sections().iter().map(|s| s.id).collect();
        assert_eq!(order[0], SectionId::Tokens);
        assert_eq!(order[1], SectionId::Metrics);
        assert_eq!(app.grid_cursor, 1);
    }

    #[test]
    fn test_grid_space_toggles_visibility() {
        use crate::SectionId;
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('g')));
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        let tokens = app.grid.sections()[app.grid.position(SectionId::Tokens)];
        assert!(!tokens.visible);
    }

    // -- Quick actions --

    #[test]
    fn test_f1_fires_toast_when_quick_actions_mounted() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::F(1)));
        assert_eq!(app.notifier.active().len(), 1);
        assert_eq!(app.notifier.active()[0].title, "DEPLOYMENT_INITIATED");
    }

    #[test]
    fn test_f1_inert_when_sidebar_hidden() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('b')));
        handle_key_event(&mut app, key(KeyCode::F(1)));
        assert!(app.notifier.active().is_empty());
    }

    #[test]
    fn test_f1_inert_when_no_quick_actions_widget() {
        let mut app = test_app();
        // tasks view: [sticky-notes, mini-calendar], no quick-actions.
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        handle_key_event(&mut app, key(KeyCode::F(1)));
        assert!(app.notifier.active().is_empty());
    }

    // -- Presentational toggles --

    #[test]
    fn test_m_toggles_voice_only_on_comms() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        assert!(!app.voice_active);
        handle_key_event(&mut app, key(KeyCode::Char('6')));
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        assert!(app.voice_active);
    }

    #[test]
    fn test_settings_space_flips_selected_toggle() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('7')));
        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        assert!(app.crt_overlay);
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.compact_density);
    }
}
