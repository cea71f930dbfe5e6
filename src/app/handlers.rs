//! Event handling for the application

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

use super::{App, Dialog, FormField, Screen, SearchField};
use crate::data::project::{ProjectType, Rank, DEPARTMENTS, DIVISIONS, SAMPLE_CUSTOMER};
use crate::search::{page_slice, total_pages, SearchForm};

use super::state::cycle_select;

impl App {
    /// Handle input events
    pub(super) fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key.code);
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, code: KeyCode) {
        match &self.dialog {
            Dialog::None => self.handle_key_normal(code),
            Dialog::Confirm(_) => self.handle_key_confirm(code),
            Dialog::Error(_) => self.handle_key_error(code),
        }
    }

    fn handle_key_normal(&mut self, code: KeyCode) {
        match self.screen {
            Screen::Search => {
                if self.search.expanded {
                    self.handle_key_search_form(code);
                } else {
                    self.handle_key_search_results(code);
                }
            }
            Screen::Detail => self.handle_key_detail(code),
            Screen::Register | Screen::Edit => self.handle_key_form(code),
        }
    }

    fn handle_key_confirm(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Dialog::Confirm(dialog) =
                    std::mem::replace(&mut self.dialog, Dialog::None)
                {
                    self.confirm_action(dialog.action);
                }
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.dialog = Dialog::None;
            }
            _ => {}
        }
    }

    fn handle_key_error(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => {
                self.dialog = Dialog::None;
            }
            _ => {}
        }
    }

    /// Keys while the filter panel is expanded. Printable characters
    /// go to the focused text field, so commands are limited to
    /// non-printable keys here.
    fn handle_key_search_form(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.search.expanded = false;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.search.focus = self.search.focus.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.search.focus = self.search.focus.prev();
            }
            KeyCode::Enter => {
                self.submit_search();
            }
            _ => self.handle_key_search_field(code),
        }
    }

    fn handle_key_search_field(&mut self, code: KeyCode) {
        let search = &mut self.search;
        match search.focus {
            SearchField::Department => match code {
                KeyCode::Right => cycle_select(&mut search.form.department, &DEPARTMENTS, true),
                KeyCode::Left => cycle_select(&mut search.form.department, &DEPARTMENTS, false),
                _ => {}
            },
            SearchField::Division => match code {
                KeyCode::Right => cycle_select(&mut search.form.division, &DIVISIONS, true),
                KeyCode::Left => cycle_select(&mut search.form.division, &DIVISIONS, false),
                _ => {}
            },
            SearchField::ProjectTypes => match code {
                KeyCode::Left => {
                    search.type_cursor = search.type_cursor.saturating_sub(1);
                }
                KeyCode::Right => {
                    search.type_cursor = (search.type_cursor + 1).min(ProjectType::ALL.len() - 1);
                }
                KeyCode::Char(' ') => {
                    let label = ProjectType::ALL[search.type_cursor].label();
                    search.form.toggle_project_type(label);
                }
                _ => {}
            },
            SearchField::Ranks => match code {
                KeyCode::Left => {
                    search.rank_cursor = search.rank_cursor.saturating_sub(1);
                }
                KeyCode::Right => {
                    search.rank_cursor = (search.rank_cursor + 1).min(Rank::SEARCHABLE.len() - 1);
                }
                KeyCode::Char(' ') => {
                    let label = Rank::SEARCHABLE[search.rank_cursor].label();
                    search.form.toggle_rank(label);
                }
                _ => {}
            },
            // Remaining fields are text inputs; editing one clears
            // its inline error
            field => match code {
                KeyCode::Char(c) => {
                    if let Some(value) = search_text_mut(&mut search.form, field) {
                        value.push(c);
                        search.errors.remove(field.error_key());
                    }
                }
                KeyCode::Backspace => {
                    if let Some(value) = search_text_mut(&mut search.form, field) {
                        value.pop();
                        search.errors.remove(field.error_key());
                    }
                }
                _ => {}
            },
        }
    }

    /// Keys while the filter panel is collapsed and the result table
    /// has focus
    fn handle_key_search_results(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.search.expanded = true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.open_registration();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.search.selected = self.search.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let rows = page_slice(&self.search.results, self.search.page).len();
                if rows > 0 && self.search.selected < rows - 1 {
                    self.search.selected += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
                if self.search.page > 1 {
                    self.search.page -= 1;
                    self.search.selected = 0;
                }
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
                if self.search.page < total_pages(self.search.results.len()) {
                    self.search.page += 1;
                    self.search.selected = 0;
                }
            }
            KeyCode::Home => {
                self.search.selected = 0;
            }
            KeyCode::End => {
                let rows = page_slice(&self.search.results, self.search.page).len();
                self.search.selected = rows.saturating_sub(1);
            }
            KeyCode::Enter => {
                self.open_selected_project();
            }
            _ => {}
        }
    }

    fn handle_key_detail(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Backspace => {
                self.go_to_search();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.open_edit();
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                self.request_delete();
            }
            _ => {}
        }
    }

    fn handle_key_form(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                let is_register = self
                    .form
                    .as_ref()
                    .map(|f| f.is_register())
                    .unwrap_or(true);
                if is_register {
                    self.go_to_search();
                } else {
                    self.form = None;
                    self.screen = Screen::Detail;
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                if let Some(ref mut form_state) = self.form {
                    form_state.next_field();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(ref mut form_state) = self.form {
                    form_state.prev_field();
                }
            }
            KeyCode::Enter => {
                self.submit_form();
            }
            _ => self.handle_key_form_field(code),
        }
    }

    fn handle_key_form_field(&mut self, code: KeyCode) {
        let Some(ref mut form_state) = self.form else {
            return;
        };
        let key = form_state.focus.error_key();

        match form_state.focus {
            FormField::Department => match code {
                KeyCode::Right => {
                    cycle_select(&mut form_state.form.department, &DEPARTMENTS, true);
                    form_state.errors.remove(key);
                }
                KeyCode::Left => {
                    cycle_select(&mut form_state.form.department, &DEPARTMENTS, false);
                    form_state.errors.remove(key);
                }
                _ => {}
            },
            FormField::ProjectType => {
                let labels: Vec<&str> = ProjectType::ALL.iter().map(|t| t.label()).collect();
                match code {
                    KeyCode::Right => {
                        cycle_select(&mut form_state.form.project_type, &labels, true);
                        form_state.errors.remove(key);
                    }
                    KeyCode::Left => {
                        cycle_select(&mut form_state.form.project_type, &labels, false);
                        form_state.errors.remove(key);
                    }
                    _ => {}
                }
            }
            FormField::Customer => {
                // Read-only input; Space runs the (stubbed) customer picker
                if code == KeyCode::Char(' ') {
                    form_state.form.customer = SAMPLE_CUSTOMER.to_string();
                    form_state.errors.remove(key);
                }
            }
            FormField::Rank => match code {
                KeyCode::Right => form_state.cycle_rank(true),
                KeyCode::Left => form_state.cycle_rank(false),
                _ => {}
            },
            _ => match code {
                KeyCode::Char(c) => {
                    if let Some(value) = form_state.focused_text_mut() {
                        value.push(c);
                    }
                    form_state.errors.remove(key);
                }
                KeyCode::Backspace => {
                    if let Some(value) = form_state.focused_text_mut() {
                        value.pop();
                    }
                    form_state.errors.remove(key);
                }
                _ => {}
            },
        }
    }
}

fn search_text_mut(form: &mut SearchForm, field: SearchField) -> Option<&mut String> {
    match field {
        SearchField::SalesFrom => Some(&mut form.sales_from),
        SearchField::SalesTo => Some(&mut form.sales_to),
        SearchField::StartDateFrom => Some(&mut form.start_date_from),
        SearchField::StartDateTo => Some(&mut form.start_date_to),
        SearchField::EndDateFrom => Some(&mut form.end_date_from),
        SearchField::EndDateTo => Some(&mut form.end_date_to),
        SearchField::ProjectName => Some(&mut form.project_name),
        _ => None,
    }
}
