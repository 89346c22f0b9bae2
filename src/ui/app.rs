use crate::ui::mvi::Reducer;
use crate::ui::screen::{ScreenIntent, ScreenReducer, ScreenState, ScreenView};
use crate::ui::spawner::{TaskId, TaskSpawner};
use std::time::Duration;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// UI-thread state. Only the event loop holds it, so every mutation of the
/// screen happens on that one thread.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    ticks: u64,
    screen: ScreenState,
    spawner: TaskSpawner,
}

impl App {
    pub fn new(spawner: TaskSpawner) -> Self {
        Self {
            should_quit: false,
            size: None,
            ticks: 0,
            screen: ScreenState::default(),
            spawner,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn view(&self) -> ScreenView {
        ScreenView::from_state(&self.screen)
    }

    pub fn task_delay(&self) -> Duration {
        self.spawner.delay()
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    /// Current spinner glyph, advanced by ticks.
    pub fn spinner(&self) -> char {
        SPINNER[(self.ticks % SPINNER.len() as u64) as usize]
    }

    /// Starts one background task. Returns immediately.
    pub fn on_button_press(&mut self) -> TaskId {
        let id = self.spawner.spawn();
        dispatch_mvi!(self, screen, ScreenReducer, ScreenIntent::ButtonPressed);
        tracing::info!(task_id = id, in_flight = self.screen.in_flight, "Button pressed");
        id
    }

    pub fn on_task_completed(&mut self, id: TaskId, text: String) {
        dispatch_mvi!(self, screen, ScreenReducer, ScreenIntent::TaskCompleted { text });
        tracing::info!(task_id = id, in_flight = self.screen.in_flight, "Background task completed");
    }

    pub fn on_tick(&mut self) {
        if self.screen.is_busy() {
            self.ticks = self.ticks.wrapping_add(1);
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }
}
