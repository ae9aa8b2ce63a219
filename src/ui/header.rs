use crate::service::HealthStatus;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_WARN,
};
use crate::ui::workflow::SubmissionState;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        service_url: &str,
        health: Option<HealthStatus>,
        submission: &SubmissionState,
    ) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (health_text, health_color) = match health {
            None => ("checking", MUTED_TEXT),
            Some(HealthStatus::Healthy) => ("online", STATUS_OK),
            Some(HealthStatus::Unhealthy { .. }) => ("not responding", STATUS_WARN),
            Some(HealthStatus::Unreachable) => ("offline", STATUS_ERROR),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Resume Bandit",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("●", Style::default().fg(health_color)),
            Span::styled(" ", text_style),
            Span::styled(service_url.to_string(), text_style),
            Span::styled(format!(" ({})", health_text), Style::default().fg(MUTED_TEXT)),
            Span::styled("  │  ", separator_style),
            Span::styled(submission.label(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
