//! Search criteria, validation and pagination

use std::collections::BTreeMap;

use serde::Serialize;

/// Fixed result page size
pub const PAGE_SIZE: usize = 10;

/// Validation errors keyed by field, plus the aggregate "general" key.
/// Recomputed on every validation pass; individual entries are cleared
/// when the user edits the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages for the aggregate banner, in stable field order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.values().map(String::as_str)
    }
}

/// Transient filter criteria for the search view. Lives only for the
/// duration of a search session; discarded on navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchForm {
    pub department: String,
    pub division: String,
    pub project_types: Vec<String>,
    pub ranks: Vec<String>,
    pub sales_from: String,
    pub sales_to: String,
    pub start_date_from: String,
    pub start_date_to: String,
    pub end_date_from: String,
    pub end_date_to: String,
    pub project_name: String,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no criterion has been entered at all
    pub fn is_blank(&self) -> bool {
        self.department.is_empty()
            && self.division.is_empty()
            && self.project_types.is_empty()
            && self.ranks.is_empty()
            && self.sales_from.is_empty()
            && self.sales_to.is_empty()
            && self.start_date_from.is_empty()
            && self.start_date_to.is_empty()
            && self.end_date_from.is_empty()
            && self.end_date_to.is_empty()
            && self.project_name.is_empty()
    }

    /// Adds the value to the multi-select list, or removes it when
    /// already present
    pub fn toggle_project_type(&mut self, value: &str) {
        toggle(&mut self.project_types, value);
    }

    pub fn toggle_rank(&mut self, value: &str) {
        toggle(&mut self.ranks, value);
    }

    /// Validates the criteria:
    /// - at least one field must be filled in,
    /// - sales bounds must be numeric, and from <= to when both given,
    /// - each date range must satisfy from <= to (lexical comparison,
    ///   correct for the ISO dates the date inputs produce).
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.is_blank() {
            errors.insert("general", "Enter at least one search criterion.");
        }

        if !self.sales_from.is_empty() || !self.sales_to.is_empty() {
            let from = parse_sales(&self.sales_from);
            let to = parse_sales(&self.sales_to);

            if !self.sales_from.is_empty() && from.is_none() {
                errors.insert("sales_from", "Sales FROM must be a number.");
            }
            if !self.sales_to.is_empty() && to.is_none() {
                errors.insert("sales_to", "Sales TO must be a number.");
            }
            if let (Some(from), Some(to)) = (from, to) {
                if from > to {
                    errors.insert("sales", "Sales FROM must not be greater than TO.");
                }
            }
        }

        if !self.start_date_from.is_empty()
            && !self.start_date_to.is_empty()
            && self.start_date_from > self.start_date_to
        {
            errors.insert("start_date", "Start date FROM must not be after TO.");
        }

        if !self.end_date_from.is_empty()
            && !self.end_date_to.is_empty()
            && self.end_date_from > self.end_date_to
        {
            errors.insert("end_date", "End date FROM must not be after TO.");
        }

        errors
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}

/// Parses a sales bound entered as text
pub fn parse_sales(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Number of pages needed for `len` results; an empty result set still
/// occupies one page
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// Slice of `items` shown on 1-based `page`. Full pages hold
/// `PAGE_SIZE` items; the last page holds the remainder.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(items.len());
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_name(name: &str) -> SearchForm {
        SearchForm {
            project_name: name.to_string(),
            ..SearchForm::default()
        }
    }

    #[test]
    fn test_blank_form_yields_exactly_one_general_error() {
        let errors = SearchForm::new().validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("general"),
            Some("Enter at least one search criterion.")
        );
    }

    #[test]
    fn test_any_single_field_satisfies_general_check() {
        assert!(form_with_name("alpha").validate().is_empty());

        let mut form = SearchForm::new();
        form.toggle_rank("S");
        assert!(form.validate().is_empty());

        let form = SearchForm {
            department: "Business Unit A".to_string(),
            ..SearchForm::default()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_sales_range_inverted() {
        let form = SearchForm {
            sales_from: "500".to_string(),
            sales_to: "100".to_string(),
            ..SearchForm::default()
        };
        let errors = form.validate();
        assert_eq!(
            errors.get("sales"),
            Some("Sales FROM must not be greater than TO.")
        );
        assert!(errors.get("sales_from").is_none());
        assert!(errors.get("sales_to").is_none());
    }

    #[test]
    fn test_sales_range_equal_bounds_accepted() {
        let form = SearchForm {
            sales_from: "100".to_string(),
            sales_to: "100".to_string(),
            ..SearchForm::default()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_non_numeric_sales_bounds() {
        let form = SearchForm {
            sales_from: "abc".to_string(),
            sales_to: "10x".to_string(),
            ..SearchForm::default()
        };
        let errors = form.validate();
        assert_eq!(errors.get("sales_from"), Some("Sales FROM must be a number."));
        assert_eq!(errors.get("sales_to"), Some("Sales TO must be a number."));
        // No range error when a bound failed to parse
        assert!(errors.get("sales").is_none());
    }

    #[test]
    fn test_single_sales_bound_is_valid() {
        let form = SearchForm {
            sales_to: "25000".to_string(),
            ..SearchForm::default()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_start_date_range_inverted() {
        let form = SearchForm {
            start_date_from: "2024-05-01".to_string(),
            start_date_to: "2024-01-01".to_string(),
            ..SearchForm::default()
        };
        let errors = form.validate();
        assert_eq!(
            errors.get("start_date"),
            Some("Start date FROM must not be after TO.")
        );
    }

    #[test]
    fn test_end_date_range_inverted() {
        let form = SearchForm {
            end_date_from: "2024-12-31".to_string(),
            end_date_to: "2024-06-30".to_string(),
            ..SearchForm::default()
        };
        let errors = form.validate();
        assert_eq!(
            errors.get("end_date"),
            Some("End date FROM must not be after TO.")
        );
    }

    #[test]
    fn test_date_range_in_order_accepted() {
        let form = SearchForm {
            start_date_from: "2024-01-01".to_string(),
            start_date_to: "2024-05-01".to_string(),
            ..SearchForm::default()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_open_date_range_accepted() {
        // Only one side given: nothing to compare
        let form = SearchForm {
            start_date_from: "2024-05-01".to_string(),
            ..SearchForm::default()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_toggle_multi_select() {
        let mut form = SearchForm::new();
        form.toggle_project_type("New development");
        assert_eq!(form.project_types, vec!["New development"]);
        form.toggle_project_type("Maintenance");
        assert_eq!(form.project_types.len(), 2);
        form.toggle_project_type("New development");
        assert_eq!(form.project_types, vec!["Maintenance"]);
    }

    #[test]
    fn test_errors_cleared_per_field() {
        let mut errors = ValidationErrors::new();
        errors.insert("sales_from", "Sales FROM must be a number.");
        errors.insert("general", "Enter at least one search criterion.");
        errors.remove("sales_from");
        assert_eq!(errors.len(), 1);
        assert!(errors.get("general").is_some());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(20), 2);
        assert_eq!(total_pages(25), 3);
    }

    #[test]
    fn test_page_slice_full_and_remainder() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(page_slice(&items, 1), (0..10).collect::<Vec<_>>());
        assert_eq!(page_slice(&items, 2), (10..20).collect::<Vec<_>>());
        assert_eq!(page_slice(&items, 3), (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_slice_out_of_range_is_empty() {
        let items: Vec<usize> = (0..5).collect();
        assert!(page_slice(&items, 4).is_empty());
        assert!(page_slice::<usize>(&[], 1).is_empty());
    }
}
