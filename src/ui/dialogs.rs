//! Dialog rendering functions

use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::ConfirmDialog;
use crate::ui::centered_rect;

/// Renders the shared confirmation modal. Shows the fixed-field
/// project summary when the dialog carries one, otherwise the plain
/// message.
pub fn render_confirm_dialog(frame: &mut Frame, dialog: &ConfirmDialog) {
    let height = if dialog.has_summary() { 18 } else { 8 };
    let area = centered_rect(70, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", dialog.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut text = vec![Line::from("")];

    if let Some(ref summary) = dialog.summary {
        let row = |label: &'static str, value: &str| {
            Line::from(vec![
                Span::styled(format!("{:<18}", label), Style::default().fg(Color::DarkGray)),
                Span::raw(value.to_string()),
            ])
        };
        text.push(row("Business unit:", &summary.department));
        text.push(row("Project name:", &summary.name));
        text.push(row("Project type:", &summary.project_type));
        text.push(row("Sales (thousands):", &summary.sales));
        text.push(row("PM:", &summary.pm));
        text.push(row("PL:", &summary.pl));
        text.push(row("Start date:", &summary.start_date));
        text.push(row("End date:", &summary.end_date));
        text.push(row("Rank:", &summary.rank));
        text.push(row("Remarks:", &summary.remarks));
        text.push(Line::from(""));
        text.push(Line::from(dialog.message.clone()));
    } else {
        text.push(Line::from(dialog.message.clone()));
    }

    text.push(Line::from(""));
    text.push(Line::from(vec![
        Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Green)),
        Span::raw(format!(" {}  ", dialog.confirm_label)),
        Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Gray)),
        Span::raw(format!(" {}", dialog.cancel_label)),
    ]));

    let alignment = if dialog.has_summary() {
        Alignment::Left
    } else {
        Alignment::Center
    };

    frame.render_widget(Paragraph::new(text).alignment(alignment), inner);
}

/// Renders error dialog
pub fn render_error_dialog(frame: &mut Frame, message: &str) {
    let area = centered_rect(60, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Gray)),
            Span::raw(" OK"),
        ]),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ConfirmAction, ProjectSummary};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_text(dialog: &ConfirmDialog) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_confirm_dialog(frame, dialog))
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn generic_dialog() -> ConfirmDialog {
        ConfirmDialog {
            title: "Delete Project".to_string(),
            message: "Delete this project?".to_string(),
            confirm_label: "Delete".to_string(),
            cancel_label: "Cancel".to_string(),
            summary: None,
            action: ConfirmAction::Delete {
                id: "PROJECT-1".to_string(),
            },
        }
    }

    fn summary_dialog() -> ConfirmDialog {
        ConfirmDialog {
            title: "Confirm Input".to_string(),
            message: "Register the project with the following details?".to_string(),
            confirm_label: "Register".to_string(),
            cancel_label: "Cancel".to_string(),
            summary: Some(ProjectSummary {
                department: "Business Unit A".to_string(),
                name: "Project A-1".to_string(),
                project_type: "New development".to_string(),
                sales: "10000".to_string(),
                pm: "Manager 1".to_string(),
                pl: "".to_string(),
                start_date: "2019-05-01".to_string(),
                end_date: "2019-12-31".to_string(),
                rank: "S".to_string(),
                remarks: "".to_string(),
            }),
            action: ConfirmAction::Register,
        }
    }

    #[test]
    fn test_generic_dialog_shows_plain_message() {
        let text = render_to_text(&generic_dialog());
        assert!(text.contains("Delete this project?"));
        assert!(!text.contains("Business unit:"));
    }

    #[test]
    fn test_summary_dialog_shows_field_table() {
        let text = render_to_text(&summary_dialog());
        assert!(text.contains("Business unit:"));
        assert!(text.contains("Project A-1"));
        assert!(text.contains("Rank:"));
        assert!(text.contains("Register the project with the following details?"));
    }

    #[test]
    fn test_summary_presence_drives_rendering_not_history() {
        // Same dialog value renders the same regardless of how often
        // it was opened and closed before
        let first = render_to_text(&summary_dialog());
        let second = render_to_text(&summary_dialog());
        assert_eq!(first, second);
    }
}
