//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render
//! loop. `App` owns every store exclusively: the layout stores, the
//! widget registry, the telemetry feed, and the notification center.
//! View renderers receive it by reference and mutate nothing.
//!
//! Edit-mode flags live here rather than in the stores: whether the grid
//! or sidebar is being edited is a presentation gate layered on top of
//! the configuration data, not part of it.

use crate::config::schema::{Config, ConsoleConfig};
use crate::data::feed::MockFeed;
use crate::layout::grid::DashboardGrid;
use crate::layout::ViewLayoutStore;
use crate::notify::Notifier;
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::ui::render_app;
use crate::widgets::quick_actions::ACTIONS;
use crate::widgets::WidgetRegistry;
use crate::{Direction, ViewId, WidgetKind};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;

/// Default render tick rate when the config value is unparseable.
const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// Default telemetry refresh interval.
const DEFAULT_DATA_REFRESH: Duration = Duration::from_secs(5);

/// Default toast lifetime.
const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(5);

/// Number of toggles on the settings view.
pub const SETTINGS_TOGGLE_COUNT: usize = 2;

/// Core application state for the TUI.
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Count of ticks processed since startup.
    pub tick_count: u64,
    /// The screen currently shown.
    pub current_view: ViewId,

    /// Per-view sidebar layouts.
    pub layouts: ViewLayoutStore,
    /// Dashboard section order and visibility.
    pub grid: DashboardGrid,
    /// Static widget catalog.
    pub registry: WidgetRegistry,
    /// Synthetic telemetry source.
    pub feed: MockFeed,
    /// Toast queue.
    pub notifier: Notifier,

    /// Whether the dashboard grid edit controls are shown.
    ///
    /// Owned here, not by the grid store. Persists across view switches
    /// so returning to the dashboard resumes editing.
    pub grid_editing: bool,
    /// Selected section index while grid editing.
    pub grid_cursor: usize,

    /// Whether the sidebar edit controls are shown for the current view.
    ///
    /// Reset when navigating away: edit mode belongs to the mounted
    /// sidebar, not to the view's stored layout.
    pub sidebar_editing: bool,
    /// Selected widget instance index while sidebar editing.
    pub sidebar_cursor: usize,
    /// Whether the add-widget picker overlay is open.
    pub picker_open: bool,
    /// Selected catalog entry in the picker.
    pub picker_cursor: usize,

    /// Comms view: voice channel engaged.
    pub voice_active: bool,
    /// Tasks view: dependency summary instead of the board.
    pub tasks_graph_mode: bool,
    /// Settings view: selected toggle row.
    pub settings_cursor: usize,
    /// Settings: scanline overlay enabled.
    pub crt_overlay: bool,
    /// Settings: compact density enabled.
    pub compact_density: bool,

    /// Render tick rate.
    tick_rate: Duration,
    /// Ticks between telemetry refreshes.
    refresh_every_ticks: u64,
}

impl App {
    /// Creates the app from configuration, seeding every store with its
    /// static defaults.
    pub fn new(config: &Config) -> Self {
        let tick_rate = ConsoleConfig::parse_duration(&config.console.tick_rate, DEFAULT_TICK_RATE);
        let data_refresh =
            ConsoleConfig::parse_duration(&config.console.data_refresh, DEFAULT_DATA_REFRESH);
        let toast_ttl =
            ConsoleConfig::parse_duration(&config.console.toast_ttl, DEFAULT_TOAST_TTL);
        let refresh_every_ticks =
            (data_refresh.as_millis() / tick_rate.as_millis().max(1)).max(1) as u64;

        Self {
            should_quit: false,
            tick_count: 0,
            current_view: config.console.start_view,
            layouts: ViewLayoutStore::new(),
            grid: DashboardGrid::new(),
            registry: WidgetRegistry::new(),
            feed: MockFeed::new(),
            notifier: Notifier::new(toast_ttl),
            grid_editing: false,
            grid_cursor: 0,
            sidebar_editing: false,
            sidebar_cursor: 0,
            picker_open: false,
            picker_cursor: 0,
            voice_active: false,
            tasks_graph_mode: false,
            settings_cursor: 0,
            crt_overlay: false,
            compact_density: false,
            tick_rate,
            refresh_every_ticks,
        }
    }

    /// App with a deterministic feed, for unit tests.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        let mut app = Self::new(&Config::default());
        app.feed = MockFeed::with_seed(7);
        app
    }

    // -- Navigation ---------------------------------------------------------

    /// Switches to `view`, dismissing the sidebar edit session.
    ///
    /// Grid edit mode is left alone: it belongs to the dashboard and is
    /// still active when the user returns there.
    pub fn switch_view(&mut self, view: ViewId) {
        if self.current_view != view {
            tracing::debug!(from = %self.current_view, to = %view, "view switched");
        }
        self.current_view = view;
        self.sidebar_editing = false;
        self.picker_open = false;
        self.sidebar_cursor = 0;
    }

    // -- Sidebar editing ----------------------------------------------------

    /// Enters or leaves sidebar edit mode for the current view.
    pub fn toggle_sidebar_editing(&mut self) {
        self.sidebar_editing = !self.sidebar_editing;
        self.sidebar_cursor = 0;
        self.picker_open = false;
    }

    /// Removes the selected widget instance's kind from the current
    /// view, first-match.
    ///
    /// With duplicates mounted this removes the earliest-inserted
    /// instance of that kind, which may not be the one under the cursor;
    /// instances carry no identity beyond their kind.
    pub fn sidebar_remove_selected(&mut self) {
        let widgets = self.layouts.widgets(self.current_view);
        let Some(kind) = widgets.get(self.sidebar_cursor).copied() else {
            return;
        };
        self.layouts.remove_widget(self.current_view, kind);
        let len = self.layouts.widgets(self.current_view).len();
        self.sidebar_cursor = self.sidebar_cursor.min(len.saturating_sub(1));
    }

    // -- Picker -------------------------------------------------------------

    /// Opens the add-widget picker at the top of the catalog.
    pub fn open_picker(&mut self) {
        self.picker_open = true;
        self.picker_cursor = 0;
    }

    /// Moves the picker selection down, clamped to the last entry.
    pub fn picker_next(&mut self) {
        self.picker_cursor = (self.picker_cursor + 1).min(WidgetKind::ALL.len() - 1);
    }

    /// Moves the picker selection up, clamped to the first entry.
    pub fn picker_previous(&mut self) {
        self.picker_cursor = self.picker_cursor.saturating_sub(1);
    }

    /// Appends the selected catalog entry to the current view and closes
    /// the picker. The catalog is never filtered: a kind already mounted
    /// stays selectable, producing a duplicate instance.
    pub fn picker_add_selected(&mut self) {
        let kind = WidgetKind::ALL[self.picker_cursor];
        self.layouts.add_widget(self.current_view, kind);
        self.picker_open = false;
        self.sidebar_cursor = self.layouts.widgets(self.current_view).len() - 1;
    }

    // -- Grid editing ---------------------------------------------------------

    /// Moves the selected section one slot in `direction`; the cursor
    /// follows the section. No-ops at either boundary.
    pub fn grid_move(&mut self, direction: Direction) {
        let id = self.grid.sections()[self.grid_cursor].id;
        self.grid.move_section(id, direction);
        self.grid_cursor = self.grid.position(id);
    }

    // -- Shared cursor keys ---------------------------------------------------

    /// `j`/Down resolved against the active mode.
    pub fn cursor_down(&mut self) {
        if self.sidebar_editing {
            let last = self
                .layouts
                .widgets(self.current_view)
                .len()
                .saturating_sub(1);
            self.sidebar_cursor = (self.sidebar_cursor + 1).min(last);
        } else if self.grid_editing && self.current_view == ViewId::Dashboard {
            self.grid_cursor = (self.grid_cursor + 1).min(self.grid.sections().len() - 1);
        } else if self.current_view == ViewId::Settings {
            self.settings_cursor = (self.settings_cursor + 1).min(SETTINGS_TOGGLE_COUNT - 1);
        }
    }

    /// `k`/Up resolved against the active mode.
    pub fn cursor_up(&mut self) {
        if self.sidebar_editing {
            self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
        } else if self.grid_editing && self.current_view == ViewId::Dashboard {
            self.grid_cursor = self.grid_cursor.saturating_sub(1);
        } else if self.current_view == ViewId::Settings {
            self.settings_cursor = self.settings_cursor.saturating_sub(1);
        }
    }

    /// Space/Enter resolved against the active mode: toggles section
    /// visibility while grid editing, flips the selected settings
    /// toggle on the settings view.
    pub fn activate_selection(&mut self) {
        if self.grid_editing && self.current_view == ViewId::Dashboard {
            let id = self.grid.sections()[self.grid_cursor].id;
            self.grid.toggle_visible(id);
        } else if self.current_view == ViewId::Settings {
            match self.settings_cursor {
                0 => self.crt_overlay = !self.crt_overlay,
                _ => self.compact_density = !self.compact_density,
            }
        }
    }

    // -- Quick actions --------------------------------------------------------

    /// Fires quick action `idx` (0-based) if the current view's sidebar
    /// is visible and has a quick-actions widget mounted; inert
    /// otherwise, mirroring a button that simply is not on screen.
    pub fn fire_quick_action(&mut self, idx: usize) {
        let Some(action) = ACTIONS.get(idx) else {
            return;
        };
        let mounted = self.layouts.sidebar_visible(self.current_view)
            && self
                .layouts
                .widgets(self.current_view)
                .contains(&WidgetKind::QuickActions);
        if !mounted {
            return;
        }
        self.notifier
            .push(action.severity, action.toast_title, action.toast_message);
    }

    // -- Tick ----------------------------------------------------------------

    /// Advances time-driven state: toast expiry and the periodic
    /// telemetry refresh.
    pub fn on_tick(&mut self) {
        self.tick_count += 1;
        self.notifier.expire();
        if self.tick_count % self.refresh_every_ticks == 0 {
            self.feed.refresh();
        }
    }

    // -- Event loop ------------------------------------------------------------

    /// Runs the TUI application: sets up the terminal, enters the event
    /// loop, restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores the terminal before printing
        // panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: processes events and renders the UI.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal =
            Terminal::new(backend).expect("failed to create ratatui terminal instance");
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        loop {
            let event = event_handler.next(&mut reader).await?;
            match event {
                Event::Key(key) => match handle_key_event(self, key) {
                    Action::Quit => {
                        self.should_quit = true;
                        return Ok(());
                    }
                    Action::None => {}
                },
                Event::Tick => self.on_tick(),
                Event::Resize(_, _) => {}
            }

            terminal.draw(|frame| {
                render_app(frame, self);
            })?;
        }
    }
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}
