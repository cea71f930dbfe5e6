//! Application state types and enums

use crate::data::project::{Project, ProjectForm, Rank};
use crate::search::{SearchForm, ValidationErrors};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Search,
    Detail,
    Register,
    Edit,
}

/// Modal dialog overlaying the current screen
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    None,
    Confirm(ConfirmDialog),
    Error(String),
}

/// What to do when the user confirms the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    Register,
    Update { id: String },
    Delete { id: String },
}

/// Fixed-field summary shown by the confirmation modal when project
/// data was submitted. Field set matches the registration form minus
/// the customer picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub department: String,
    pub name: String,
    pub project_type: String,
    pub sales: String,
    pub pm: String,
    pub pl: String,
    pub start_date: String,
    pub end_date: String,
    pub rank: String,
    pub remarks: String,
}

impl ProjectSummary {
    pub fn from_form(form: &ProjectForm) -> Self {
        Self {
            department: form.department.clone(),
            name: form.name.clone(),
            project_type: form.project_type.clone(),
            sales: form.sales.clone(),
            pm: form.pm.clone(),
            pl: form.pl.clone(),
            start_date: form.start_date.clone(),
            end_date: form.end_date.clone(),
            rank: form.rank.label().to_string(),
            remarks: form.remarks.clone(),
        }
    }
}

/// Shared yes/no confirmation modal. Renders either the structured
/// project summary or the plain message; the handler resolves `action`
/// on confirm.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub summary: Option<ProjectSummary>,
    pub action: ConfirmAction,
}

impl ConfirmDialog {
    pub fn has_summary(&self) -> bool {
        self.summary.is_some()
    }
}

/// Search form fields in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Department,
    Division,
    ProjectTypes,
    Ranks,
    SalesFrom,
    SalesTo,
    StartDateFrom,
    StartDateTo,
    EndDateFrom,
    EndDateTo,
    ProjectName,
}

impl SearchField {
    const ORDER: [SearchField; 11] = [
        SearchField::Department,
        SearchField::Division,
        SearchField::ProjectTypes,
        SearchField::Ranks,
        SearchField::SalesFrom,
        SearchField::SalesTo,
        SearchField::StartDateFrom,
        SearchField::StartDateTo,
        SearchField::EndDateFrom,
        SearchField::EndDateTo,
        SearchField::ProjectName,
    ];

    pub fn next(self) -> Self {
        let pos = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(pos + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let pos = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(pos + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Error key cleared when the user edits this field. Pair range
    /// errors ("sales", "start_date", "end_date") deliberately use
    /// keys no single input maps to, so they stay until the next
    /// submit recomputes them.
    pub fn error_key(self) -> &'static str {
        match self {
            SearchField::Department => "department",
            SearchField::Division => "division",
            SearchField::ProjectTypes => "project_types",
            SearchField::Ranks => "ranks",
            SearchField::SalesFrom => "sales_from",
            SearchField::SalesTo => "sales_to",
            SearchField::StartDateFrom => "start_date_from",
            SearchField::StartDateTo => "start_date_to",
            SearchField::EndDateFrom => "end_date_from",
            SearchField::EndDateTo => "end_date_to",
            SearchField::ProjectName => "project_name",
        }
    }
}

/// Search view state: filter form, focus, results and paging
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub form: SearchForm,
    pub focus: SearchField,
    /// Cursor within the project type checkbox row
    pub type_cursor: usize,
    /// Cursor within the rank checkbox row
    pub rank_cursor: usize,
    pub errors: ValidationErrors,
    pub results: Vec<Project>,
    pub has_searched: bool,
    /// Whether the filter panel is expanded
    pub expanded: bool,
    /// Current result page, 1-based
    pub page: usize,
    /// Selected row within the current page
    pub selected: usize,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            form: SearchForm::new(),
            focus: SearchField::Department,
            type_cursor: 0,
            rank_cursor: 0,
            errors: ValidationErrors::new(),
            results: Vec::new(),
            has_searched: false,
            expanded: true,
            page: 1,
            selected: 0,
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the project form registers a new record or edits an
/// existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Register,
    Edit { id: String },
}

/// Project form fields in tab order. Customer only exists on the
/// registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Department,
    Name,
    ProjectType,
    Customer,
    Sales,
    Pm,
    Pl,
    StartDate,
    EndDate,
    Rank,
    Remarks,
}

impl FormField {
    const ORDER: [FormField; 11] = [
        FormField::Department,
        FormField::Name,
        FormField::ProjectType,
        FormField::Customer,
        FormField::Sales,
        FormField::Pm,
        FormField::Pl,
        FormField::StartDate,
        FormField::EndDate,
        FormField::Rank,
        FormField::Remarks,
    ];

    fn step(self, forward: bool, with_customer: bool) -> Self {
        let len = Self::ORDER.len();
        let mut pos = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        loop {
            pos = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
            let field = Self::ORDER[pos];
            if field != FormField::Customer || with_customer {
                return field;
            }
        }
    }

    pub fn error_key(self) -> &'static str {
        match self {
            FormField::Department => "department",
            FormField::Name => "name",
            FormField::ProjectType => "project_type",
            FormField::Customer => "customer",
            FormField::Sales => "sales",
            FormField::Pm => "pm",
            FormField::Pl => "pl",
            FormField::StartDate => "start_date",
            FormField::EndDate => "end_date",
            FormField::Rank => "rank",
            FormField::Remarks => "remarks",
        }
    }
}

/// Registration/edit view state: form buffer, focus and errors
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub form: ProjectForm,
    pub mode: FormMode,
    pub focus: FormField,
    pub errors: ValidationErrors,
}

impl FormState {
    pub fn register() -> Self {
        Self {
            form: ProjectForm::new(),
            mode: FormMode::Register,
            focus: FormField::Department,
            errors: ValidationErrors::new(),
        }
    }

    pub fn edit(project: &Project) -> Self {
        Self {
            form: ProjectForm::from_project(project),
            mode: FormMode::Edit {
                id: project.id.clone(),
            },
            focus: FormField::Department,
            errors: ValidationErrors::new(),
        }
    }

    pub fn is_register(&self) -> bool {
        self.mode == FormMode::Register
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.step(true, self.is_register());
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.step(false, self.is_register());
    }

    /// Mutable text buffer behind the focused field, if it is a text
    /// input. Selects, the radio group and the read-only customer
    /// picker return None.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.form.name),
            FormField::Sales => Some(&mut self.form.sales),
            FormField::Pm => Some(&mut self.form.pm),
            FormField::Pl => Some(&mut self.form.pl),
            FormField::StartDate => Some(&mut self.form.start_date),
            FormField::EndDate => Some(&mut self.form.end_date),
            FormField::Remarks => Some(&mut self.form.remarks),
            _ => None,
        }
    }

    pub fn cycle_rank(&mut self, forward: bool) {
        self.form.rank = if forward {
            self.form.rank.next()
        } else {
            self.form.rank.prev()
        };
    }
}

/// Cycles a select field through "" plus the given options
pub fn cycle_select(value: &mut String, options: &[&str], forward: bool) {
    // Index 0 is the empty "not selected" entry
    let pos = options
        .iter()
        .position(|o| o == value)
        .map(|p| p + 1)
        .unwrap_or(0);
    let len = options.len() + 1;
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    *value = if next == 0 {
        String::new()
    } else {
        options[next - 1].to_string()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::project::sample_projects;

    #[test]
    fn test_search_field_order_wraps() {
        assert_eq!(SearchField::Department.next(), SearchField::Division);
        assert_eq!(SearchField::ProjectName.next(), SearchField::Department);
        assert_eq!(SearchField::Department.prev(), SearchField::ProjectName);
    }

    #[test]
    fn test_form_field_skips_customer_in_edit_mode() {
        let project = &sample_projects()[0];
        let mut state = FormState::edit(project);
        state.focus = FormField::ProjectType;
        state.next_field();
        assert_eq!(state.focus, FormField::Sales);
        state.prev_field();
        assert_eq!(state.focus, FormField::ProjectType);
    }

    #[test]
    fn test_form_field_includes_customer_in_register_mode() {
        let mut state = FormState::register();
        state.focus = FormField::ProjectType;
        state.next_field();
        assert_eq!(state.focus, FormField::Customer);
    }

    #[test]
    fn test_register_form_defaults_rank_s() {
        let state = FormState::register();
        assert_eq!(state.form.rank.label(), "S");
    }

    #[test]
    fn test_cycle_select_through_empty() {
        let options = ["one", "two"];
        let mut value = String::new();
        cycle_select(&mut value, &options, true);
        assert_eq!(value, "one");
        cycle_select(&mut value, &options, true);
        assert_eq!(value, "two");
        cycle_select(&mut value, &options, true);
        assert_eq!(value, "");
        cycle_select(&mut value, &options, false);
        assert_eq!(value, "two");
    }

    #[test]
    fn test_summary_built_from_form() {
        let form = ProjectForm::from_project(&sample_projects()[1]);
        let summary = ProjectSummary::from_form(&form);
        assert_eq!(summary.name, "Project B-2");
        assert_eq!(summary.rank, "S");
        assert_eq!(summary.sales, "29000");
        // The customer field never appears in the summary
    }
}
