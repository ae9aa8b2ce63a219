//! Projection of a service response onto the results panel.

use crate::service::QuestionResult;

pub const RESULT_SUCCESS_MESSAGE: &str = "Question generated successfully!";

/// Displayed values of the results region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultPanel {
    pub visible: bool,
    pub candidate_name: String,
    pub predicted_type: String,
    pub bandit_type: String,
    pub reward: String,
    pub question: String,
    pub rationale: Vec<String>,
}

impl ResultPanel {
    /// Replace every displayed value with `result` and reveal the panel.
    ///
    /// The rationale list is rebuilt, never appended to.
    pub fn render(&mut self, result: &QuestionResult) {
        self.candidate_name = result.name.clone();
        self.predicted_type = result.predicted_type.clone();
        self.bandit_type = result.bandit_selected_type.clone();
        self.reward = result.reward.to_string();
        self.question = result.question.clone();
        self.rationale.clear();
        self.rationale.extend(result.rationale.iter().cloned());
        self.visible = true;
    }

    /// Hide the panel. Values stay so a copy still sees the last question.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}
