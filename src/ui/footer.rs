use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const KEY_HINTS: &[(&str, &str)] = &[
    ("Enter", "Submit"),
    ("Ctrl+N", "New question"),
    ("Ctrl+Y", "Copy"),
    ("Esc", "Clear"),
    ("Ctrl+Q", "Quit"),
];

#[derive(Default)]
pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Hint for the focused field when it has one, otherwise the key bindings.
    /// The version sits on the bottom border.
    pub fn widget(&self, hint: Option<&str>) -> Paragraph<'static> {
        let line = match hint {
            Some(hint) => Line::from(vec![
                Span::styled(" ℹ ", Style::default().fg(ACCENT)),
                Span::styled(hint.to_string(), Style::default().fg(HEADER_TEXT)),
            ]),
            None => key_hints(),
        };

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title_bottom(
                    Line::from(Span::styled(
                        format!(" v{} ", VERSION),
                        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
                    ))
                    .right_aligned(),
                ),
        )
    }
}

fn key_hints() -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(GLOBAL_BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(ACCENT)));
        spans.push(Span::styled(
            format!(": {}", action),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    Line::from(spans)
}
