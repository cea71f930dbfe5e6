//! Application module

mod handlers;
pub mod state;

pub use state::{
    ConfirmAction, ConfirmDialog, Dialog, FormField, FormMode, FormState, ProjectSummary, Screen,
    SearchField, SearchState,
};

use anyhow::Result;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::project::Project;
use crate::data::store::ProjectStore;
use crate::ui::{
    render_confirm_dialog, render_detail, render_error_dialog, render_project_form, render_search,
};

/// Main application state
pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub dialog: Dialog,
    pub store: ProjectStore,

    // Search view state
    pub search: SearchState,

    // Current record (when in Detail/Edit)
    pub current_project: Option<Project>,

    // Registration/edit form state
    pub form: Option<FormState>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_store(ProjectStore::with_sample_data())
    }

    /// Create app over a custom store (for testing)
    pub fn with_store(store: ProjectStore) -> Self {
        Self {
            screen: Screen::Search,
            should_quit: false,
            dialog: Dialog::None,
            store,
            search: SearchState::new(),
            current_project: None,
            form: None,
        }
    }

    /// Main application loop
    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Validates the filter form and, on success, replaces the result
    /// set, resets paging to page 1 and collapses the filter panel
    pub(super) fn submit_search(&mut self) {
        let errors = self.search.form.validate();
        if !errors.is_empty() {
            self.search.errors = errors;
            return;
        }

        self.search.errors.clear();
        self.search.results = self.store.search(&self.search.form);
        self.search.has_searched = true;
        self.search.page = 1;
        self.search.selected = 0;
        self.search.expanded = false;
    }

    /// Opens the detail view for the selected result row
    pub(super) fn open_selected_project(&mut self) {
        let page = crate::search::page_slice(&self.search.results, self.search.page);
        if let Some(project) = page.get(self.search.selected) {
            self.current_project = Some(project.clone());
            self.screen = Screen::Detail;
        }
    }

    pub(super) fn open_registration(&mut self) {
        self.form = Some(FormState::register());
        self.screen = Screen::Register;
    }

    pub(super) fn open_edit(&mut self) {
        if let Some(ref project) = self.current_project {
            self.form = Some(FormState::edit(project));
            self.screen = Screen::Edit;
        }
    }

    /// Validates the project form and opens the confirmation modal
    /// with the structured summary
    pub(super) fn submit_form(&mut self) {
        let Some(ref mut form_state) = self.form else {
            return;
        };

        let errors = form_state.form.validate(form_state.is_register());
        if !errors.is_empty() {
            form_state.errors = errors;
            return;
        }
        form_state.errors.clear();

        let summary = ProjectSummary::from_form(&form_state.form);
        let (message, confirm_label, action) = match &form_state.mode {
            FormMode::Register => (
                "Register the project with the following details?",
                "Register",
                ConfirmAction::Register,
            ),
            FormMode::Edit { id } => (
                "Update the project with the following details?",
                "Update",
                ConfirmAction::Update { id: id.clone() },
            ),
        };

        self.dialog = Dialog::Confirm(ConfirmDialog {
            title: "Confirm Input".to_string(),
            message: message.to_string(),
            confirm_label: confirm_label.to_string(),
            cancel_label: "Cancel".to_string(),
            summary: Some(summary),
            action,
        });
    }

    /// Opens the delete confirmation for the record on the detail view
    pub(super) fn request_delete(&mut self) {
        let Some(ref project) = self.current_project else {
            return;
        };

        self.dialog = Dialog::Confirm(ConfirmDialog {
            title: "Delete Project".to_string(),
            message: "Delete this project?".to_string(),
            confirm_label: "Delete".to_string(),
            cancel_label: "Cancel".to_string(),
            summary: None,
            action: ConfirmAction::Delete {
                id: project.id.clone(),
            },
        });
    }

    /// Runs the confirmed action: a stub persistence call followed by
    /// navigation
    pub(super) fn confirm_action(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::Register => {
                let Some(ref form_state) = self.form else {
                    return;
                };
                match self.store.create(&form_state.form) {
                    Ok(()) => self.go_to_search(),
                    Err(e) => {
                        self.dialog = Dialog::Error(format!("Failed to register: {}", e));
                    }
                }
            }
            ConfirmAction::Update { id } => {
                let Some(ref form_state) = self.form else {
                    return;
                };
                match self.store.update(&id, &form_state.form) {
                    Ok(()) => {
                        self.form = None;
                        self.screen = Screen::Detail;
                    }
                    Err(e) => {
                        self.dialog = Dialog::Error(format!("Failed to update: {}", e));
                    }
                }
            }
            ConfirmAction::Delete { id } => match self.store.delete(&id) {
                Ok(()) => self.go_to_search(),
                Err(e) => {
                    self.dialog = Dialog::Error(format!("Failed to delete: {}", e));
                }
            },
        }
    }

    /// Navigates back to a fresh search view. Filter criteria and
    /// results do not survive navigation.
    pub(super) fn go_to_search(&mut self) {
        self.search = SearchState::new();
        self.current_project = None;
        self.form = None;
        self.screen = Screen::Search;
    }

    /// Render the application
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

        self.render_header(frame, chunks[0]);
        self.render_content(frame, chunks[1]);
        self.render_footer(frame, chunks[2]);

        match &self.dialog {
            Dialog::None => {}
            Dialog::Confirm(dialog) => {
                render_confirm_dialog(frame, dialog);
            }
            Dialog::Error(msg) => {
                render_error_dialog(frame, msg);
            }
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(" proman v{} ", version);

        let screen_indicator = match self.screen {
            Screen::Search => "Project Search".to_string(),
            Screen::Detail => {
                if let Some(ref p) = self.current_project {
                    format!("Project Detail — {}", p.name)
                } else {
                    "Project Detail".to_string()
                }
            }
            Screen::Register => "Project Registration".to_string(),
            Screen::Edit => "Project Edit".to_string(),
        };

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("— "),
            Span::styled(screen_indicator, Style::default().fg(Color::Yellow)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(header, area);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        match self.screen {
            Screen::Search => {
                render_search(frame, area, &self.search);
            }
            Screen::Detail => {
                render_detail(frame, area, self.current_project.as_ref());
            }
            Screen::Register | Screen::Edit => {
                if let Some(ref form_state) = self.form {
                    render_project_form(frame, area, form_state);
                }
            }
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let key = |label: &'static str| Span::styled(label, Style::default().fg(Color::Black).bg(Color::Gray));

        let hints = match self.screen {
            Screen::Search => {
                if self.search.expanded {
                    vec![
                        key(" Tab "),
                        Span::raw(" Next field  "),
                        key(" ←→ "),
                        Span::raw(" Change  "),
                        key(" Space "),
                        Span::raw(" Toggle  "),
                        Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Green)),
                        Span::raw(" Search  "),
                        key(" Esc "),
                        Span::raw(" Collapse "),
                    ]
                } else {
                    vec![
                        key(" ↑↓ "),
                        Span::raw(" Row  "),
                        key(" ←→ "),
                        Span::raw(" Page  "),
                        key(" Enter "),
                        Span::raw(" Detail  "),
                        key(" E "),
                        Span::raw(" Criteria  "),
                        key(" N "),
                        Span::raw(" New  "),
                        key(" Q "),
                        Span::raw(" Quit "),
                    ]
                }
            }
            Screen::Detail => {
                vec![
                    key(" E "),
                    Span::raw(" Edit  "),
                    Span::styled(" D ", Style::default().fg(Color::Black).bg(Color::Red)),
                    Span::raw(" Delete  "),
                    key(" Esc "),
                    Span::raw(" Back  "),
                    key(" Q "),
                    Span::raw(" Quit "),
                ]
            }
            Screen::Register | Screen::Edit => {
                vec![
                    key(" Tab "),
                    Span::raw(" Next field  "),
                    key(" ←→ "),
                    Span::raw(" Change  "),
                    Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Green)),
                    Span::raw(" Submit  "),
                    key(" Esc "),
                    Span::raw(" Cancel "),
                ]
            }
        };

        let footer = Paragraph::new(Line::from(hints)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(footer, area);
    }
}
