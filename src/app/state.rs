use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::KeyCode;

use crate::db::KeyValueStore;
use crate::store::{Command, SubscriptionId, ThemeStore, TimerStore, views};
use crate::types::{PRESET_CATEGORIES, Timer, TimerId, new_timer_id};

use super::{AlertKind, AppEvent, AppView, ProgressWatcher};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub timers: TimerStore,
    pub theme: ThemeStore,
    watcher: Rc<RefCell<ProgressWatcher>>,
    watch: Option<SubscriptionId>,
    pub view: AppView,
    view_history: Vec<AppView>,
    pub expanded_category: Option<String>,
    pub selected_row: usize,
    pub selected_history_index: usize,
    pub status: Option<String>,
    pub new_timer_popup: Option<NewTimerPopup>,
    pub confirm_popup: Option<ConfirmPopup>,
}

/// One selectable line of the home board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    Category(String),
    Timer(TimerId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewTimerField {
    Name,
    Duration,
    Category,
}

#[derive(Clone, Debug)]
pub struct NewTimerPopup {
    pub name: String,
    pub duration: String,
    pub category_index: usize,
    pub field: NewTimerField,
}

impl NewTimerPopup {
    fn new() -> Self {
        Self {
            name: String::new(),
            duration: String::new(),
            category_index: 0,
            field: NewTimerField::Name,
        }
    }

    pub fn category(&self) -> &'static str {
        PRESET_CATEGORIES[self.category_index % PRESET_CATEGORIES.len()]
    }

    fn next_field(&mut self) {
        self.field = match self.field {
            NewTimerField::Name => NewTimerField::Duration,
            NewTimerField::Duration => NewTimerField::Category,
            NewTimerField::Category => NewTimerField::Name,
        };
    }

    fn select_prev(&mut self) {
        if self.category_index == 0 {
            self.category_index = PRESET_CATEGORIES.len() - 1;
        } else {
            self.category_index -= 1;
        }
    }

    fn select_next(&mut self) {
        self.category_index = (self.category_index + 1) % PRESET_CATEGORIES.len();
    }
}

#[derive(Clone, Debug)]
pub struct ConfirmPopup {
    pub message: String,
    pub timer_id: TimerId,
}

impl App {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let theme = ThemeStore::open(storage.clone());
        let mut timers = TimerStore::open(storage);

        let watcher = Rc::new(RefCell::new(ProgressWatcher::new()));
        watcher.borrow_mut().observe(timers.timers());
        let sink = watcher.clone();
        let watch = timers.subscribe(move |snapshot| sink.borrow_mut().observe(snapshot));

        let mut app = Self {
            running: true,
            timers,
            theme,
            watcher,
            watch: Some(watch),
            view: AppView::Timers,
            view_history: Vec::new(),
            expanded_category: None,
            selected_row: 0,
            selected_history_index: 0,
            status: None,
            new_timer_popup: None,
            confirm_popup: None,
        };
        app.handle_alerts();
        app
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {
                self.timers.run_pending_ticks();
            }
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
        self.handle_alerts();
        self.clamp_selection();
    }

    /// Turn watcher alerts into status messages; finished timers get completed.
    fn handle_alerts(&mut self) {
        loop {
            let alerts = self.watcher.borrow_mut().drain();
            if alerts.is_empty() {
                break;
            }
            for alert in alerts {
                tracing::info!(timer = %alert.timer_id, kind = ?alert.kind, "timer alert");
                if alert.kind == AlertKind::Finished {
                    self.timers.dispatch(Command::Complete(alert.timer_id.clone()));
                }
                self.status = Some(alert.message());
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.confirm_popup.is_some() {
            self.handle_confirm_key(key);
            return;
        }
        if self.new_timer_popup.is_some() {
            self.handle_new_timer_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(AppView::Help);
                }
            }
            KeyCode::Char('h') => self.navigate_to(AppView::History),
            KeyCode::Char('t') => {
                self.theme.toggle();
                self.status = Some(format!("Theme: {}", self.theme.mode()));
            }
            KeyCode::Esc => self.go_back(),
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('d') => self.open_confirm_popup(),
            _ => {
                if self.view == AppView::Timers {
                    self.handle_board_key(key);
                }
            }
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('n') => {
                self.new_timer_popup = Some(NewTimerPopup::new());
                self.clear_status();
            }
            KeyCode::Enter => self.toggle_expanded(),
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('r') => {
                if let Some(Row::Timer(id)) = self.selected_row() {
                    self.timers.dispatch(Command::Reset(id));
                }
            }
            KeyCode::Char('S') => self.timers.dispatch(Command::StartAll),
            KeyCode::Char('P') => self.timers.dispatch(Command::PauseAll),
            KeyCode::Char('R') => self.timers.dispatch(Command::ResetAll),
            _ => {}
        }
    }

    fn handle_new_timer_key(&mut self, key: KeyCode) {
        let Some(popup) = self.new_timer_popup.as_mut() else {
            return;
        };
        match key {
            KeyCode::Esc => {
                self.new_timer_popup = None;
                self.clear_status();
            }
            KeyCode::Enter => self.apply_new_timer_popup(),
            KeyCode::Tab => popup.next_field(),
            KeyCode::Up | KeyCode::Left => {
                if popup.field == NewTimerField::Category {
                    popup.select_prev();
                }
            }
            KeyCode::Down | KeyCode::Right => {
                if popup.field == NewTimerField::Category {
                    popup.select_next();
                }
            }
            KeyCode::Backspace | KeyCode::Delete => match popup.field {
                NewTimerField::Name => {
                    popup.name.pop();
                }
                NewTimerField::Duration => {
                    popup.duration.pop();
                }
                NewTimerField::Category => {}
            },
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                match popup.field {
                    NewTimerField::Name => popup.name.push(ch),
                    NewTimerField::Duration => {
                        if ch.is_ascii_digit() {
                            popup.duration.push(ch);
                        }
                    }
                    NewTimerField::Category => {}
                }
            }
            _ => {}
        }
    }

    fn apply_new_timer_popup(&mut self) {
        let Some(popup) = self.new_timer_popup.as_ref() else {
            return;
        };
        let name = popup.name.trim().to_string();
        if name.is_empty() || popup.duration.is_empty() {
            self.status = Some("Name and duration are required.".to_string());
            return;
        }
        let Ok(duration) = popup.duration.parse::<u64>() else {
            self.status = Some("Duration is too large.".to_string());
            return;
        };
        let category = popup.category().to_string();

        self.timers.dispatch(Command::Add {
            id: new_timer_id(),
            name: name.clone(),
            duration,
            category,
        });
        self.new_timer_popup = None;
        self.status = Some(format!("Added '{name}'."));
    }

    fn handle_confirm_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Some(popup) = self.confirm_popup.take() {
                    self.timers.dispatch(Command::Delete(popup.timer_id));
                    self.status = Some("Timer deleted.".to_string());
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_popup = None;
            }
            _ => {}
        }
    }

    fn open_confirm_popup(&mut self) {
        let target = match self.view {
            AppView::Timers => match self.selected_row() {
                Some(Row::Timer(id)) => self.timers.find(&id),
                _ => None,
            },
            AppView::History => views::completed(self.timers.timers())
                .get(self.selected_history_index)
                .copied(),
            AppView::Help => None,
        };
        if let Some(timer) = target {
            self.confirm_popup = Some(ConfirmPopup {
                message: format!("Delete timer '{}'?", timer.name),
                timer_id: timer.id.clone(),
            });
        }
    }

    /// Category headers, with the timers of the expanded category listed under it.
    pub fn rows(&self) -> Vec<Row> {
        let timers = self.timers.timers();
        let mut rows = Vec::new();
        for category in views::active_categories(timers) {
            rows.push(Row::Category(category.to_string()));
            if self.expanded_category.as_deref() == Some(category) {
                rows.extend(
                    views::active_in_category(timers, category)
                        .into_iter()
                        .map(|t| Row::Timer(t.id.clone())),
                );
            }
        }
        rows
    }

    pub fn selected_row(&self) -> Option<Row> {
        self.rows().into_iter().nth(self.selected_row)
    }

    pub fn completed_timers(&self) -> Vec<&Timer> {
        views::completed(self.timers.timers())
    }

    fn toggle_expanded(&mut self) {
        let Some(Row::Category(category)) = self.selected_row() else {
            return;
        };
        if self.expanded_category.as_deref() == Some(category.as_str()) {
            self.expanded_category = None;
        } else {
            self.expanded_category = Some(category.clone());
        }
        if let Some(index) = self
            .rows()
            .iter()
            .position(|row| *row == Row::Category(category.clone()))
        {
            self.selected_row = index;
        }
    }

    fn toggle_selected(&mut self) {
        match self.selected_row() {
            Some(Row::Category(category)) => {
                if views::category_is_paused(self.timers.timers(), &category) {
                    self.timers.dispatch(Command::StartCategory(category));
                } else {
                    self.timers.dispatch(Command::PauseCategory(category));
                }
            }
            Some(Row::Timer(id)) => {
                let paused = self.timers.find(&id).is_some_and(Timer::is_paused);
                if paused {
                    self.timers.dispatch(Command::Start(id));
                } else {
                    self.timers.dispatch(Command::Pause(id));
                }
            }
            None => {}
        }
    }

    fn move_selection_up(&mut self) {
        match self.view {
            AppView::Timers => self.selected_row = self.selected_row.saturating_sub(1),
            AppView::History => {
                self.selected_history_index = self.selected_history_index.saturating_sub(1)
            }
            AppView::Help => {}
        }
    }

    fn move_selection_down(&mut self) {
        match self.view {
            AppView::Timers => {
                if self.selected_row + 1 < self.rows().len() {
                    self.selected_row += 1;
                }
            }
            AppView::History => {
                if self.selected_history_index + 1 < self.completed_timers().len() {
                    self.selected_history_index += 1;
                }
            }
            AppView::Help => {}
        }
    }

    fn clamp_selection(&mut self) {
        let rows = self.rows().len();
        self.selected_row = self.selected_row.min(rows.saturating_sub(1));
        let history = self.completed_timers().len();
        self.selected_history_index = self
            .selected_history_index
            .min(history.saturating_sub(1));
        if let Some(category) = &self.expanded_category {
            if !views::active_categories(self.timers.timers()).contains(&category.as_str()) {
                self.expanded_category = None;
            }
        }
    }

    fn navigate_to(&mut self, view: AppView) {
        if self.view != view {
            self.view_history.push(self.view.clone());
            self.view = view;
        }
    }

    fn go_back(&mut self) {
        if let Some(previous) = self.view_history.pop() {
            self.view = previous;
        }
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    /// Release the tick source and the progress watcher before the store goes away.
    pub fn shutdown(&mut self) {
        self.timers.shutdown();
        if let Some(watch) = self.watch.take() {
            self.timers.unsubscribe(watch);
        }
    }
}
