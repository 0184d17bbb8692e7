// SPDX-License-Identifier: MPL-2.0
//! Front-end state and input handling.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};

use crate::activity::{export, ActivityLog, UserAction};
use crate::carousel::Carousel;
use crate::config::MAX_DIRECT_TABS;
use crate::menu::{Drink, Menu};

/// Maps a number-row digit to a zero-based tab position.
fn tab_from_digit(digit: char) -> Option<usize> {
    let tab = digit.to_digit(10)? as usize;
    if tab == 0 || tab > MAX_DIRECT_TABS {
        return None;
    }
    Some(tab - 1)
}

/// State for one browsing session.
///
/// The menu is fixed for the session; the slider is rebound on every
/// transition and the activity log records what happened, so the renderer
/// only ever reads.
pub struct App {
    menu: Menu,
    slider: Carousel,
    log: ActivityLog,
    export_dir: PathBuf,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a session over `menu`, opening on `start` (wrapped into
    /// range), exporting activity into `export_dir` on request.
    #[must_use]
    pub fn new(menu: Menu, start: i64, log: ActivityLog, export_dir: PathBuf) -> Self {
        let slider = menu.carousel(start);
        Self {
            menu,
            slider,
            log,
            export_dir,
            status: None,
            should_quit: false,
        }
    }

    /// The menu being browsed.
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// The current slider state.
    #[must_use]
    pub fn slider(&self) -> Carousel {
        self.slider
    }

    /// The drink at a relative offset from the selection.
    #[must_use]
    pub fn drink_at(&self, offset: i64) -> &Drink {
        self.menu.drink_at(&self.slider, offset)
    }

    /// The session's activity log.
    #[must_use]
    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Transient message for the footer, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// True once the user asked to leave.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Flags the session for exit without recording a user action.
    /// Used for interrupts (ctrl-c) rather than the quit key.
    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.step(1),
            KeyCode::Left | KeyCode::Char('h') => self.step(-1),
            KeyCode::Home => self.jump(0),
            // -1 wraps to the last drink, wherever the selection is.
            KeyCode::End => self.jump(-1),
            KeyCode::Char('e') => self.export_log(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char(digit) if digit.is_ascii_digit() => {
                if let Some(tab) = tab_from_digit(digit) {
                    self.select_tab(tab);
                }
            }
            _ => {}
        }
    }

    fn step(&mut self, offset: i64) {
        let action = if offset >= 0 {
            UserAction::StepNext
        } else {
            UserAction::StepPrevious
        };
        let from = self.slider.current();
        self.slider = self.slider.step(offset);

        let landed = self.drink_at(0).id.clone();
        self.log.record_action_with_details(action, landed);
        self.log.record_transition(from, self.slider.current());
        self.status = None;
    }

    fn jump(&mut self, index: i64) {
        let from = self.slider.current();
        self.slider = self.slider.go_to(index);

        self.log.record_action(UserAction::JumpTo { index });
        self.log.record_transition(from, self.slider.current());
        self.status = None;
    }

    fn select_tab(&mut self, tab: usize) {
        if tab >= self.menu.len() {
            self.log
                .record_warning(format!("tab {} past the end of the menu", tab + 1));
            self.status = Some(format!("No drink on tab {}", tab + 1));
            return;
        }

        let from = self.slider.current();
        self.slider = self.slider.go_to(tab as i64);

        self.log.record_action(UserAction::SelectTab { index: tab });
        self.log.record_transition(from, self.slider.current());
        self.status = None;
    }

    fn export_log(&mut self) {
        self.log.record_action(UserAction::ExportLog);
        match export::export_to_dir(&self.log, &self.export_dir) {
            Ok(path) => {
                self.status = Some(format!("Activity written to {}", path.display()));
            }
            Err(err) => {
                self.log.record_error(err.to_string());
                self.status = Some(format!("Export failed: {err}"));
            }
        }
    }

    fn quit(&mut self) {
        self.log.record_action(UserAction::Quit);
        self.should_quit = true;
    }
}
