//! Registration/edit form rendering

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{FormField, FormState};
use crate::data::project::Rank;
use crate::search::ValidationErrors;
use crate::ui::field_style;

const LABEL_WIDTH: usize = 22;

/// Renders the project form used by both the registration and the
/// edit view. The customer picker row only exists when registering.
pub fn render_project_form(frame: &mut Frame, area: Rect, state: &FormState) {
    let title = if state.is_register() {
        " Project Registration "
    } else {
        " Project Edit "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    if !state.errors.is_empty() {
        for message in state.errors.messages() {
            lines.push(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(""));
    }

    let focus = state.focus;
    let form = &state.form;
    let errors = &state.errors;

    lines.push(select_line(
        "Business unit*",
        &form.department,
        focus == FormField::Department,
        errors,
        "department",
    ));
    lines.push(text_line(
        "PJ name*",
        &form.name,
        focus == FormField::Name,
        errors,
        "name",
    ));
    lines.push(select_line(
        "PJ type*",
        &form.project_type,
        focus == FormField::ProjectType,
        errors,
        "project_type",
    ));

    if state.is_register() {
        let mut spans = vec![
            Span::styled(
                format!("{:<LABEL_WIDTH$}", "Customer*"),
                field_style(focus == FormField::Customer),
            ),
            Span::raw(form.customer.clone()),
        ];
        if focus == FormField::Customer {
            spans.push(Span::styled(
                "  (Space to pick)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        if let Some(message) = errors.get("customer") {
            spans.push(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Red),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(text_line(
        "Sales (thousands)*",
        &form.sales,
        focus == FormField::Sales,
        errors,
        "sales",
    ));
    lines.push(text_line("PM*", &form.pm, focus == FormField::Pm, errors, "pm"));
    lines.push(text_line("PL", &form.pl, focus == FormField::Pl, errors, "pl"));
    lines.push(text_line(
        "Start date*",
        &form.start_date,
        focus == FormField::StartDate,
        errors,
        "start_date",
    ));
    lines.push(text_line(
        "End date*",
        &form.end_date,
        focus == FormField::EndDate,
        errors,
        "end_date",
    ));

    // Rank radio group
    let mut rank_spans = vec![Span::styled(
        format!("{:<LABEL_WIDTH$}", "Rank*"),
        field_style(focus == FormField::Rank),
    )];
    for rank in Rank::ALL {
        let marker = if rank == form.rank { "(•)" } else { "( )" };
        let style = if rank == form.rank {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        rank_spans.push(Span::styled(format!("{} {}  ", marker, rank.label()), style));
    }
    lines.push(Line::from(rank_spans));

    lines.push(text_line(
        "Remarks",
        &form.remarks,
        focus == FormField::Remarks,
        errors,
        "remarks",
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn text_line<'a>(
    label: &'a str,
    value: &str,
    focused: bool,
    errors: &ValidationErrors,
    error_key: &str,
) -> Line<'a> {
    let mut spans = vec![
        Span::styled(format!("{:<LABEL_WIDTH$}", label), field_style(focused)),
        Span::raw(value.to_string()),
    ];
    if focused {
        spans.push(Span::styled("▌", Style::default().fg(Color::White)));
    }
    if let Some(message) = errors.get(error_key) {
        spans.push(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}

fn select_line<'a>(
    label: &'a str,
    value: &str,
    focused: bool,
    errors: &ValidationErrors,
    error_key: &str,
) -> Line<'a> {
    let display = if value.is_empty() {
        "(select)".to_string()
    } else {
        value.to_string()
    };
    let mut spans = vec![
        Span::styled(format!("{:<LABEL_WIDTH$}", label), field_style(focused)),
        Span::styled(
            format!("< {} >", display),
            if focused {
                Style::default().fg(Color::White)
            } else {
                Style::default()
            },
        ),
    ];
    if let Some(message) = errors.get(error_key) {
        spans.push(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}
