//! Search and detail screen rendering

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::{SearchField, SearchState};
use crate::data::project::{Project, ProjectType, Rank};
use crate::search::{page_slice, total_pages, ValidationErrors};
use crate::ui::{field_style, format_sales};

const LABEL_WIDTH: usize = 26;

/// Renders the search view: the collapsible filter panel above the
/// result table
pub fn render_search(frame: &mut Frame, area: Rect, state: &SearchState) {
    if state.expanded {
        let panel_lines = filter_panel_lines(state);
        let panel_height = panel_lines.len() as u16 + 2;
        let chunks =
            Layout::vertical([Constraint::Length(panel_height), Constraint::Min(3)]).split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search Criteria ")
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);
        frame.render_widget(Paragraph::new(panel_lines), inner);

        render_results(frame, chunks[1], state);
    } else {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(area);

        let bar = Paragraph::new(Line::from(vec![
            Span::styled("collapsed", Style::default().fg(Color::DarkGray)),
            Span::raw("  press "),
            Span::styled("E", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" to change criteria"),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search Criteria ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(bar, chunks[0]);

        render_results(frame, chunks[1], state);
    }
}

fn filter_panel_lines(state: &SearchState) -> Vec<Line<'static>> {
    let form = &state.form;
    let errors = &state.errors;
    let mut lines: Vec<Line> = Vec::new();

    if !errors.is_empty() {
        for message in errors.messages() {
            lines.push(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(""));
    }

    lines.push(select_line(
        "Business unit",
        &form.department,
        state.focus == SearchField::Department,
    ));
    lines.push(select_line(
        "Division",
        &form.division,
        state.focus == SearchField::Division,
    ));

    // Checkbox rows: highlight the option under the cursor when the
    // row has focus
    lines.push(checkbox_line(
        "PJ type",
        &ProjectType::ALL.map(|t| t.label()),
        &form.project_types,
        state.focus == SearchField::ProjectTypes,
        state.type_cursor,
    ));
    lines.push(checkbox_line(
        "Rank",
        &Rank::SEARCHABLE.map(|r| r.label()),
        &form.ranks,
        state.focus == SearchField::Ranks,
        state.rank_cursor,
    ));

    lines.push(text_line(
        "Sales FROM (thousands)",
        &form.sales_from,
        state.focus == SearchField::SalesFrom,
        errors,
        &["sales_from", "sales"],
    ));
    lines.push(text_line(
        "Sales TO (thousands)",
        &form.sales_to,
        state.focus == SearchField::SalesTo,
        errors,
        &["sales_to"],
    ));
    lines.push(text_line(
        "Start date FROM",
        &form.start_date_from,
        state.focus == SearchField::StartDateFrom,
        errors,
        &["start_date"],
    ));
    lines.push(text_line(
        "Start date TO",
        &form.start_date_to,
        state.focus == SearchField::StartDateTo,
        errors,
        &[],
    ));
    lines.push(text_line(
        "End date FROM",
        &form.end_date_from,
        state.focus == SearchField::EndDateFrom,
        errors,
        &["end_date"],
    ));
    lines.push(text_line(
        "End date TO",
        &form.end_date_to,
        state.focus == SearchField::EndDateTo,
        errors,
        &[],
    ));
    lines.push(text_line(
        "PJ name",
        &form.project_name,
        state.focus == SearchField::ProjectName,
        errors,
        &[],
    ));

    lines
}

fn render_results(frame: &mut Frame, area: Rect, state: &SearchState) {
    if !state.has_searched {
        let hint = Paragraph::new("Enter search criteria and press Enter")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Results ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(hint, area);
        return;
    }

    if state.results.is_empty() {
        let empty = Paragraph::new("No projects matched your criteria")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Results (0) ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(empty, area);
        return;
    }

    let pages = total_pages(state.results.len());
    let title = format!(
        " Results ({})  Page {} / {} ",
        state.results.len(),
        state.page,
        pages
    );

    let header = Row::new(
        [
            "PJ name", "Unit", "Division", "Type", "Rank", "PM", "Sales", "Start", "End",
        ]
        .map(Cell::from),
    )
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = page_slice(&state.results, state.page)
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let style = if i == state.selected {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(project.name.clone()),
                Cell::from(project.department.clone()),
                Cell::from(project.division.clone()),
                Cell::from(project.project_type.label()),
                Cell::from(project.rank.label()),
                Cell::from(project.pm.clone()),
                Cell::from(format_sales(project.sales)),
                Cell::from(project.start_date_str()),
                Cell::from(project.end_date_str()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(14),
            Constraint::Length(15),
            Constraint::Length(11),
            Constraint::Length(24),
            Constraint::Length(4),
            Constraint::Length(11),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(table, area);
}

/// Renders the read-only detail view for a project
pub fn render_detail(frame: &mut Frame, area: Rect, project: Option<&Project>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Project Detail ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(project) = project else {
        let missing = Paragraph::new("No project selected")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(missing, inner);
        return;
    };

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{:<20}", label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(value),
        ])
    };
    let optional = |value: &Option<String>| match value {
        Some(v) if !v.is_empty() => v.clone(),
        _ => "---".to_string(),
    };

    let columns = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = vec![
        Line::from(""),
        row(
            "Business unit:",
            format!("{} / {}", project.department, project.division),
        ),
        row("PJ name:", project.name.clone()),
        row("PJ type:", project.project_type.label().to_string()),
        row("Sales (thousands):", format_sales(project.sales)),
        row("PM:", project.pm.clone()),
        row("Start date:", project.start_date_str()),
        row("Remarks:", optional(&project.remarks)),
    ];
    let right = vec![
        Line::from(""),
        row("Rank:", project.rank.label().to_string()),
        Line::from(""),
        Line::from(""),
        Line::from(""),
        row("PL:", optional(&project.pl)),
        row("End date:", project.end_date_str()),
    ];

    frame.render_widget(Paragraph::new(left), columns[0]);
    frame.render_widget(Paragraph::new(right), columns[1]);
}

fn text_line(
    label: &'static str,
    value: &str,
    focused: bool,
    errors: &ValidationErrors,
    error_keys: &[&str],
) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{:<LABEL_WIDTH$}", label), field_style(focused)),
        Span::raw(value.to_string()),
    ];
    if focused {
        spans.push(Span::styled("▌", Style::default().fg(Color::White)));
    }
    for key in error_keys {
        if let Some(message) = errors.get(key) {
            spans.push(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Red),
            ));
        }
    }
    Line::from(spans)
}

fn select_line(label: &'static str, value: &str, focused: bool) -> Line<'static> {
    let display = if value.is_empty() { "(any)" } else { value };
    Line::from(vec![
        Span::styled(format!("{:<LABEL_WIDTH$}", label), field_style(focused)),
        Span::styled(
            format!("< {} >", display),
            if focused {
                Style::default().fg(Color::White)
            } else {
                Style::default()
            },
        ),
    ])
}

fn checkbox_line(
    label: &'static str,
    options: &[&'static str],
    checked: &[String],
    focused: bool,
    cursor: usize,
) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:<LABEL_WIDTH$}", label),
        field_style(focused),
    )];
    for (i, option) in options.iter().enumerate() {
        let marker = if checked.iter().any(|c| c == option) {
            "[x]"
        } else {
            "[ ]"
        };
        let style = if focused && i == cursor {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{} {}", marker, option), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::project::sample_projects;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_search_to_text(state: &SearchState) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_search(frame, frame.area(), state))
            .unwrap();
        buffer_text(terminal.backend().buffer().clone())
    }

    fn buffer_text(buffer: ratatui::buffer::Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_expanded_panel_shows_all_fields() {
        let state = SearchState::new();
        let text = render_search_to_text(&state);
        assert!(text.contains("Business unit"));
        assert!(text.contains("Sales FROM (thousands)"));
        assert!(text.contains("PJ name"));
        assert!(text.contains("Enter search criteria and press Enter"));
    }

    #[test]
    fn test_collapsed_panel_shows_bar_and_results() {
        let mut state = SearchState::new();
        state.expanded = false;
        state.has_searched = true;
        state.results = sample_projects();
        let text = render_search_to_text(&state);
        assert!(text.contains("to change criteria"));
        assert!(text.contains("Page 1 / 2"));
        assert!(text.contains("Project A-1"));
        assert!(text.contains("10,000"));
        // Page 2 rows are not on screen
        assert!(!text.contains("Project K-11"));
    }

    #[test]
    fn test_second_page_shows_remainder() {
        let mut state = SearchState::new();
        state.expanded = false;
        state.has_searched = true;
        state.results = sample_projects();
        state.page = 2;
        let text = render_search_to_text(&state);
        assert!(text.contains("Page 2 / 2"));
        assert!(!text.contains("Project A-1"));
    }

    #[test]
    fn test_empty_results_message() {
        let mut state = SearchState::new();
        state.expanded = false;
        state.has_searched = true;
        let text = render_search_to_text(&state);
        assert!(text.contains("No projects matched your criteria"));
    }

    #[test]
    fn test_validation_errors_shown_in_panel() {
        let mut state = SearchState::new();
        state.errors.insert("general", "Enter at least one search criterion.".to_string());
        let text = render_search_to_text(&state);
        assert!(text.contains("Enter at least one search criterion."));
    }

    #[test]
    fn test_detail_renders_fields_and_placeholders() {
        let projects = sample_projects();
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_detail(frame, frame.area(), Some(&projects[1])))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer().clone());

        assert!(text.contains("Project B-2"));
        assert!(text.contains("29,000"));
        assert!(text.contains("2019-06-20"));
        // Missing PL renders as a placeholder
        assert!(text.contains("---"));
    }

    #[test]
    fn test_detail_without_project() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_detail(frame, frame.area(), None))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer().clone());
        assert!(text.contains("No project selected"));
    }
}
