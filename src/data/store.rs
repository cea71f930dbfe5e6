use anyhow::{bail, Result};
use tracing::info;

use crate::data::project::{sample_projects, Project, ProjectForm};
use crate::search::{parse_sales, SearchForm};

/// In-memory project store. Search runs real filtering over the sample
/// records; create/update/delete are stubs that only emit diagnostics,
/// standing in for a future persistence collaborator with the same
/// shape.
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Creates a store seeded with the sample data set
    pub fn with_sample_data() -> Self {
        Self {
            projects: sample_projects(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Returns the records matching the criteria. Empty criteria match
    /// everything, so a form that passed validation never matches on
    /// fields the user left blank.
    pub fn search(&self, form: &SearchForm) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| matches(p, form))
            .cloned()
            .collect()
    }

    /// Stub: logs the submitted form instead of persisting it
    pub fn create(&self, form: &ProjectForm) -> Result<()> {
        let payload = serde_json::to_string(form)?;
        info!(target: "proman::store", %payload, "create project (stub, not persisted)");
        Ok(())
    }

    /// Stub: logs the update instead of applying it
    pub fn update(&self, id: &str, form: &ProjectForm) -> Result<()> {
        if self.get(id).is_none() {
            bail!("Project '{}' not found", id);
        }
        let payload = serde_json::to_string(form)?;
        info!(target: "proman::store", id, %payload, "update project (stub, not persisted)");
        Ok(())
    }

    /// Stub: logs the deletion instead of removing the record
    pub fn delete(&self, id: &str) -> Result<()> {
        if self.get(id).is_none() {
            bail!("Project '{}' not found", id);
        }
        info!(target: "proman::store", id, "delete project (stub, not persisted)");
        Ok(())
    }
}

fn matches(project: &Project, form: &SearchForm) -> bool {
    if !form.department.is_empty() && project.department != form.department {
        return false;
    }
    if !form.division.is_empty() && project.division != form.division {
        return false;
    }
    if !form.project_types.is_empty()
        && !form
            .project_types
            .iter()
            .any(|t| t == project.project_type.label())
    {
        return false;
    }
    if !form.ranks.is_empty() && !form.ranks.iter().any(|r| r == project.rank.label()) {
        return false;
    }

    let sales = project.sales as f64;
    if let Some(from) = parse_sales(&form.sales_from) {
        if sales < from {
            return false;
        }
    }
    if let Some(to) = parse_sales(&form.sales_to) {
        if sales > to {
            return false;
        }
    }

    // Date bounds use the same lexical comparison as validation; both
    // sides are ISO formatted.
    let start = project.start_date_str();
    if !form.start_date_from.is_empty() && start < form.start_date_from {
        return false;
    }
    if !form.start_date_to.is_empty() && start > form.start_date_to {
        return false;
    }

    let end = project.end_date_str();
    if !form.end_date_from.is_empty() && end < form.end_date_from {
        return false;
    }
    if !form.end_date_to.is_empty() && end > form.end_date_to {
        return false;
    }

    if !form.project_name.is_empty()
        && !project
            .name
            .to_lowercase()
            .contains(&form.project_name.to_lowercase())
    {
        return false;
    }

    true
}
