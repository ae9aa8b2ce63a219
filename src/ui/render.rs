use crate::profile::{FieldKind, FormField};
use crate::ui::app::{App, ScrollAnchor};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, top_right_rect};
use crate::ui::notification::NotificationKind;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use crate::ui::workflow::FieldMark;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const LABEL_WIDTH: usize = 21;

/// Body content plus the line index of each scroll anchor.
pub struct BodyLines {
    pub lines: Vec<Line<'static>>,
    pub focused: usize,
    pub loading: Option<usize>,
    pub results: Option<usize>,
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let workflow = app.workflow();
    frame.render_widget(
        Header::new().widget(app.service_url(), workflow.health, &workflow.submission),
        header,
    );

    frame.render_widget(Clear, body);
    let content = body_lines(app, body.width.saturating_sub(2) as usize);
    let offset = scroll_offset(&content, app.scroll_anchor(), body.height as usize);
    frame.render_widget(
        Paragraph::new(content.lines).scroll((offset as u16, 0)),
        body,
    );

    frame.render_widget(Footer::new().widget(app.focused_field().hint()), footer);

    if let Some(notification) = app.notifications().current() {
        let color = match notification.kind {
            NotificationKind::Success => STATUS_OK,
            NotificationKind::Error => STATUS_ERROR,
        };
        let (width, height) = toast_size(&notification.message, body);
        let toast = top_right_rect(body, width, height);

        frame.render_widget(Clear, toast);
        let widget = Paragraph::new(notification.message.clone())
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        frame.render_widget(widget, toast);
    }
}

/// Toast box size: message width plus borders, capped at two thirds of the body.
pub fn toast_size(message: &str, body: Rect) -> (u16, u16) {
    let chars = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let width = chars
        .saturating_add(4)
        .min(body.width.max(1).saturating_mul(2) / 3)
        .max(20);
    let inner_width = usize::from(width.saturating_sub(2).max(1));
    let lines = wrap_text(message, inner_width).len();
    let height = u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2);
    (width, height)
}

/// Build the scrollable body: form fields, loading line and results panel.
pub fn body_lines(app: &App, width: usize) -> BodyLines {
    let workflow = app.workflow();
    let focused_field = app.focused_field();
    let mut lines = Vec::new();
    let mut focused = 0;

    lines.push(Line::from(""));
    for field in FormField::all() {
        let is_focused = *field == focused_field;
        if is_focused {
            focused = lines.len();
        }

        let mark = workflow.mark(*field);
        let (marker, marker_color) = match mark {
            FieldMark::Untouched => (" ", MUTED_TEXT),
            FieldMark::Valid => ("✓", STATUS_OK),
            FieldMark::Invalid { .. } => ("✗", STATUS_ERROR),
        };
        let required = if field.is_required() { "*" } else { " " };
        let label = format!("{}{}", field.label(), required);

        let mut spans = vec![
            Span::styled(format!(" {} ", marker), Style::default().fg(marker_color)),
            Span::styled(
                format!("{:<width$}", label, width = LABEL_WIDTH),
                Style::default().fg(if is_focused { ACCENT } else { HEADER_TEXT }),
            ),
            Span::styled(
                workflow.values.get(*field).to_string(),
                Style::default().fg(HEADER_TEXT),
            ),
        ];
        if is_focused {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
            if matches!(field.kind(), FieldKind::Choice(_)) {
                spans.push(Span::styled("  ◂ ▸", Style::default().fg(MUTED_TEXT)));
            }
        }

        let mut line = Line::from(spans);
        if is_focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);

        if let FieldMark::Invalid { message } = mark {
            lines.push(Line::from(Span::styled(
                format!("{:indent$}↳ {}", "", message, indent = LABEL_WIDTH + 3),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }
    lines.push(Line::from(""));

    let mut loading = None;
    if workflow.loading {
        loading = Some(lines.len());
        let spinner = SPINNER_FRAMES[(app.animation_tick() as usize) % SPINNER_FRAMES.len()];
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("Generating question...", Style::default().fg(HEADER_TEXT)),
        ]));
        lines.push(Line::from(""));
    }

    let mut results = None;
    let panel = &workflow.results;
    if panel.visible {
        results = Some(lines.len());
        let title_style = if app.results_entering() {
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(" Generated Question ", title_style)));
        lines.push(Line::from(""));
        for (label, value) in [
            ("Candidate", &panel.candidate_name),
            ("Predicted type", &panel.predicted_type),
            ("Bandit selected type", &panel.bandit_type),
            ("Reward", &panel.reward),
        ] {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("   {:<width$}", label, width = LABEL_WIDTH),
                    Style::default().fg(MUTED_TEXT),
                ),
                Span::styled(value.clone(), Style::default().fg(HEADER_TEXT)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(section_title("Question"));
        for text in wrap_text(&panel.question, width.saturating_sub(3).max(1)) {
            lines.push(Line::from(Span::styled(
                format!("   {}", text),
                Style::default().fg(HEADER_TEXT),
            )));
        }

        lines.push(Line::from(""));
        lines.push(section_title("Rationale"));
        for item in &panel.rationale {
            for (i, text) in wrap_text(item, width.saturating_sub(5).max(1))
                .into_iter()
                .enumerate()
            {
                let bullet = if i == 0 { "   • " } else { "     " };
                lines.push(Line::from(vec![
                    Span::styled(bullet, Style::default().fg(ACCENT)),
                    Span::styled(text, Style::default().fg(HEADER_TEXT)),
                ]));
            }
        }
    }

    BodyLines {
        lines,
        focused,
        loading,
        results,
    }
}

fn section_title(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!("   {}", title),
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::UNDERLINED),
    ))
}

/// First visible line so the anchored region is on screen.
pub fn scroll_offset(content: &BodyLines, anchor: ScrollAnchor, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let target = match anchor {
        ScrollAnchor::FocusedField => Some(content.focused),
        ScrollAnchor::Loading => content.loading,
        ScrollAnchor::Results => content.results,
    };
    let Some(target) = target else {
        return 0;
    };

    match anchor {
        // Keep the focused field on the last visible row once it would fall off.
        ScrollAnchor::FocusedField => (target + 2).saturating_sub(height),
        // Regions scroll to the top of the viewport, like scrollIntoView.
        ScrollAnchor::Loading | ScrollAnchor::Results => {
            if target + 1 >= height {
                target
            } else {
                0
            }
        }
    }
}

/// Greedy word wrap on char counts. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
