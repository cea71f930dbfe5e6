use chrono::NaiveDate;
use serde::Serialize;

use crate::search::ValidationErrors;

/// Business units selectable in forms
pub const DEPARTMENTS: [&str; 3] = ["Business Unit A", "Business Unit B", "Business Unit C"];

/// Divisions selectable in the search form
pub const DIVISIONS: [&str; 3] = ["Division C", "Division D", "Division E"];

/// Customer returned by the stubbed customer picker
pub const SAMPLE_CUSTOMER: &str = "Sample Customer Inc.";

/// Categorical priority/size tier of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rank {
    Ss,
    S,
    A,
    B,
    C,
    D,
}

impl Rank {
    /// All ranks offered by the registration form (radio group order)
    pub const ALL: [Rank; 6] = [Rank::Ss, Rank::S, Rank::A, Rank::B, Rank::C, Rank::D];

    /// Ranks offered as search criteria (SS is not searchable)
    pub const SEARCHABLE: [Rank; 5] = [Rank::S, Rank::A, Rank::B, Rank::C, Rank::D];

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ss => "SS",
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Rank::Ss => Rank::S,
            Rank::S => Rank::A,
            Rank::A => Rank::B,
            Rank::B => Rank::C,
            Rank::C => Rank::D,
            Rank::D => Rank::Ss,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Rank::Ss => Rank::D,
            Rank::S => Rank::Ss,
            Rank::A => Rank::S,
            Rank::B => Rank::A,
            Rank::C => Rank::B,
            Rank::D => Rank::C,
        }
    }
}

/// Project type as offered by the type select / checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectType {
    NewDevelopment,
    MaintenanceDevelopment,
    ErpSupport,
    Maintenance,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::NewDevelopment,
        ProjectType::MaintenanceDevelopment,
        ProjectType::ErpSupport,
        ProjectType::Maintenance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::NewDevelopment => "New development",
            ProjectType::MaintenanceDevelopment => "Maintenance development",
            ProjectType::ErpSupport => "ERP support",
            ProjectType::Maintenance => "Maintenance",
        }
    }

}

/// A project record
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub department: String,
    pub division: String,
    pub project_type: ProjectType,
    pub rank: Rank,
    pub pm: String,
    pub pl: Option<String>,
    /// Actual sales, in thousands
    pub sales: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remarks: Option<String>,
}

impl Project {
    /// Start date formatted for display and lexical range checks
    pub fn start_date_str(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    pub fn end_date_str(&self) -> String {
        self.end_date.format("%Y-%m-%d").to_string()
    }
}

/// Registration/edit form buffer. All inputs are kept as entered;
/// parsing happens at validation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectForm {
    pub department: String,
    pub name: String,
    pub project_type: String,
    pub customer: String,
    pub sales: String,
    pub pm: String,
    pub pl: String,
    pub start_date: String,
    pub end_date: String,
    pub rank: Rank,
    pub remarks: String,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self {
            department: String::new(),
            name: String::new(),
            project_type: String::new(),
            customer: String::new(),
            sales: String::new(),
            pm: String::new(),
            pl: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            rank: Rank::S,
            remarks: String::new(),
        }
    }

    /// Pre-populates the form from an existing record (edit view)
    pub fn from_project(project: &Project) -> Self {
        Self {
            department: project.department.clone(),
            name: project.name.clone(),
            project_type: project.project_type.label().to_string(),
            customer: String::new(),
            sales: project.sales.to_string(),
            pm: project.pm.clone(),
            pl: project.pl.clone().unwrap_or_default(),
            start_date: project.start_date_str(),
            end_date: project.end_date_str(),
            rank: project.rank,
            remarks: project.remarks.clone().unwrap_or_default(),
        }
    }

    /// Checks required fields. The customer picker only exists on the
    /// registration form, so edit validation passes `require_customer = false`.
    pub fn validate(&self, require_customer: bool) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.department.is_empty() {
            errors.insert("department", "Business unit is required.");
        }
        if self.name.trim().is_empty() {
            errors.insert("name", "Project name is required.");
        }
        if self.project_type.is_empty() {
            errors.insert("project_type", "Project type is required.");
        }
        if require_customer && self.customer.is_empty() {
            errors.insert("customer", "Customer is required.");
        }
        if self.sales.trim().is_empty() {
            errors.insert("sales", "Sales is required.");
        } else if self.sales.trim().parse::<u64>().is_err() {
            errors.insert("sales", "Sales must be a number.");
        }
        if self.pm.trim().is_empty() {
            errors.insert("pm", "PM is required.");
        }
        if self.start_date.trim().is_empty() {
            errors.insert("start_date", "Start date is required.");
        }
        if self.end_date.trim().is_empty() {
            errors.insert("end_date", "End date is required.");
        }

        errors
    }
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the in-memory sample data set: two fixed records followed by
/// eighteen generated ones, twenty in total.
pub fn sample_projects() -> Vec<Project> {
    let mut projects = vec![
        Project {
            id: "PROJECT-1".to_string(),
            name: "Project A-1".to_string(),
            department: "Business Unit A".to_string(),
            division: "Division C".to_string(),
            project_type: ProjectType::NewDevelopment,
            rank: Rank::S,
            pm: "Manager 1".to_string(),
            pl: None,
            sales: 10_000,
            start_date: NaiveDate::from_ymd_opt(2019, 5, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2019, 12, 31).expect("valid date"),
            remarks: None,
        },
        Project {
            id: "PROJECT-2".to_string(),
            name: "Project B-2".to_string(),
            department: "Business Unit B".to_string(),
            division: "Division F".to_string(),
            project_type: ProjectType::MaintenanceDevelopment,
            rank: Rank::S,
            pm: "Manager 2".to_string(),
            pl: None,
            sales: 29_000,
            start_date: NaiveDate::from_ymd_opt(2019, 6, 20).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2020, 1, 19).expect("valid date"),
            remarks: None,
        },
    ];

    for index in 0u64..18 {
        let name_letter = (b'C' + index as u8) as char;
        let dept_letter = (b'C' + (index % 3) as u8) as char;
        let division_letter = (b'G' + (index % 5) as u8) as char;

        projects.push(Project {
            id: format!("PROJECT-{}", index + 3),
            name: format!("Project {}-{}", name_letter, index + 3),
            department: format!("Business Unit {}", dept_letter),
            division: format!("Division {}", division_letter),
            project_type: if index % 2 == 0 {
                ProjectType::NewDevelopment
            } else {
                ProjectType::MaintenanceDevelopment
            },
            rank: Rank::SEARCHABLE[(index % 5) as usize],
            pm: format!("Manager {}", index + 3),
            pl: None,
            sales: 10_000 + index * 5_000,
            start_date: NaiveDate::from_ymd_opt(2019, 7, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2020, 3, 31).expect("valid date"),
            remarks: None,
        });
    }

    projects
}
