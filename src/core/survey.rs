// Survey walk-through state
//
// Keeps the question list and which one the user is looking at, and checks
// answers before they go into the response set.

use crate::error::{FinderError, Result};
use crate::store::{Question, Responses};

pub struct Survey {
    questions: Vec<Question>,
    current_index: usize,
}

impl Survey {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Move to another question. Out-of-range indexes are ignored.
    pub fn set_current_index(&mut self, index: usize) -> bool {
        if index < self.questions.len() {
            self.current_index = index;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Advance to the next question, if there is one
    pub fn advance(&mut self) -> bool {
        self.set_current_index(self.current_index + 1)
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Record an answer after checking it exists
    ///
    /// # Returns
    /// * `Ok(())` - Answer stored (replacing any earlier one)
    /// * `Err(FinderError::InvalidAnswer)` - Unknown question or option
    pub fn record_answer(
        &self,
        responses: &mut Responses,
        question_id: &str,
        option_id: &str,
    ) -> Result<()> {
        let question = self.question(question_id).ok_or_else(|| {
            FinderError::InvalidAnswer(format!("no question with id '{}'", question_id))
        })?;

        if question.option(option_id).is_none() {
            return Err(FinderError::InvalidAnswer(format!(
                "question '{}' has no option '{}'",
                question_id, option_id
            )));
        }

        responses.insert(question_id, option_id);
        Ok(())
    }

    /// Questions that still need an answer, in survey order
    pub fn unanswered<'a>(&'a self, responses: &'a Responses) -> impl Iterator<Item = &'a Question> {
        self.questions.iter().filter(|q| !responses.contains(&q.id))
    }

    pub fn is_complete(&self, responses: &Responses) -> bool {
        self.unanswered(responses).next().is_none()
    }
}
