use crate::config::Config;
use crate::profile::{FieldKind, FormField};
use crate::ui::mvi::Reducer;
use crate::ui::notification::NotificationCenter;
use crate::ui::workflow::{WorkflowEffect, WorkflowIntent, WorkflowReducer, WorkflowState};
use std::time::{Duration, Instant};

/// Ticks the results panel stays highlighted after it appears.
pub const ENTRANCE_TICKS: u8 = 4;

/// Part of the body the viewport keeps visible.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScrollAnchor {
    FocusedField,
    Loading,
    Results,
}

pub struct App {
    should_quit: bool,
    /// Index into `FormField::all()`.
    focus: usize,
    /// Workflow state (MVI pattern).
    workflow: WorkflowState,
    /// Effects produced by dispatch and not yet executed.
    pending: Vec<WorkflowEffect>,
    notifications: NotificationCenter,
    scroll_anchor: ScrollAnchor,
    entrance_ticks: u8,
    animation_tick: u8,
    service_url: String,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            focus: 0,
            workflow: WorkflowState::new(config.submission.reject_while_loading),
            pending: Vec::new(),
            notifications: NotificationCenter::new(Duration::from_secs(
                config.notifications.display_seconds,
            )),
            scroll_anchor: ScrollAnchor::FocusedField,
            entrance_ticks: 0,
            animation_tick: 0,
            service_url: config.service.base_url.clone(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn workflow(&self) -> &WorkflowState {
        &self.workflow
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn focused_field(&self) -> FormField {
        FormField::all()[self.focus]
    }

    pub fn scroll_anchor(&self) -> ScrollAnchor {
        self.scroll_anchor
    }

    /// True while the results panel plays its entrance highlight.
    pub fn results_entering(&self) -> bool {
        self.entrance_ticks > 0
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Run the workflow reducer and queue its effects.
    pub fn dispatch(&mut self, intent: WorkflowIntent) {
        let (state, effects) = WorkflowReducer::reduce(std::mem::take(&mut self.workflow), intent);
        self.workflow = state;
        self.pending.extend(effects);
    }

    /// Drain effects queued by previous dispatches, oldest first.
    pub fn take_effects(&mut self) -> Vec<WorkflowEffect> {
        std::mem::take(&mut self.pending)
    }

    /// Submit with a fresh request id.
    pub fn submit(&mut self) {
        let request_id = uuid::Uuid::new_v4().to_string();
        self.dispatch(WorkflowIntent::FormSubmitted { request_id });
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus + 1) % FormField::all().len();
        self.move_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let len = FormField::all().len();
        let prev = if self.focus == 0 { len - 1 } else { self.focus - 1 };
        self.move_focus(prev);
    }

    fn move_focus(&mut self, index: usize) {
        let field = self.focused_field();
        self.dispatch(WorkflowIntent::FieldBlurred { field });
        self.focus = index;
        self.scroll_anchor = ScrollAnchor::FocusedField;
    }

    pub fn type_char(&mut self, ch: char) {
        let field = self.focused_field();
        let mut value = self.workflow.values.get(field).to_string();
        value.push(ch);
        self.set_focused_value(value);
    }

    /// Append pasted text to the focused field. Line breaks become spaces.
    pub fn paste(&mut self, text: &str) {
        let pasted: String = text
            .chars()
            .map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch })
            .collect();
        if pasted.is_empty() {
            return;
        }
        let field = self.focused_field();
        let mut value = self.workflow.values.get(field).to_string();
        value.push_str(&pasted);
        self.set_focused_value(value);
    }

    pub fn backspace(&mut self) {
        let field = self.focused_field();
        let mut value = self.workflow.values.get(field).to_string();
        if value.pop().is_some() {
            self.set_focused_value(value);
        }
    }

    pub fn clear_field(&mut self) {
        let field = self.focused_field();
        if !self.workflow.values.get(field).is_empty() {
            self.set_focused_value(String::new());
        }
    }

    /// Step through a choice field's options. Free text that is not one of
    /// the options jumps to the first (forward) or last (backward) option.
    pub fn cycle_choice(&mut self, forward: bool) {
        let field = self.focused_field();
        let FieldKind::Choice(options) = field.kind() else {
            return;
        };
        if options.is_empty() {
            return;
        }

        let current = self.workflow.values.get(field);
        let next = match options.iter().position(|option| *option == current) {
            Some(index) if forward => (index + 1) % options.len(),
            Some(index) => (index + options.len() - 1) % options.len(),
            None if forward => 0,
            None => options.len() - 1,
        };
        self.set_focused_value(options[next].to_string());
    }

    fn set_focused_value(&mut self, value: String) {
        let field = self.focused_field();
        self.scroll_anchor = ScrollAnchor::FocusedField;
        self.dispatch(WorkflowIntent::FieldChanged { field, value });
    }

    /// Apply an effect that only concerns the view.
    /// Returns false for effects that need the outside world.
    pub fn apply_view_effect(&mut self, effect: &WorkflowEffect, now: Instant) -> bool {
        match effect {
            WorkflowEffect::ShowLoading | WorkflowEffect::HideLoading => true,
            WorkflowEffect::ScrollToLoading => {
                self.scroll_anchor = ScrollAnchor::Loading;
                true
            }
            WorkflowEffect::ScrollToResults => {
                self.scroll_anchor = ScrollAnchor::Results;
                self.entrance_ticks = ENTRANCE_TICKS;
                true
            }
            WorkflowEffect::Notify { message, kind } => {
                self.notifications.notify(message.clone(), *kind, now);
                true
            }
            WorkflowEffect::SaveSnapshot(_)
            | WorkflowEffect::ClearSnapshot
            | WorkflowEffect::SendProfile { .. }
            | WorkflowEffect::CopyText(_) => false,
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.notifications.expire(now);
        self.entrance_ticks = self.entrance_ticks.saturating_sub(1);
        if self.workflow.loading {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }
}
