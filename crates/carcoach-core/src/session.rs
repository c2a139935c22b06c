//! Quiz sessions: question sampling, grading and score recording.

use rand::Rng;
use serde::Serialize;

use crate::error::ScoreLogError;
use crate::quiz::{Question, QuizBank};
use crate::scores::ScoreLog;

/// Questions drawn per quiz.
pub const QUIZ_LENGTH: usize = 5;

/// Name recorded when the player leaves theirs blank.
pub const ANONYMOUS: &str = "Anonymous";

/// A wrongly answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mistake {
    /// Zero-based position in the quiz.
    pub index: usize,
    pub question: Question,
    /// The letter the player chose, empty if they skipped the question.
    pub chosen: String,
}

/// Graded result of a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    pub player: String,
    pub level: String,
    pub score: u32,
    pub total: u32,
    pub mistakes: Vec<Mistake>,
}

impl QuizOutcome {
    pub fn is_perfect(&self) -> bool {
        self.mistakes.is_empty()
    }

    /// Result text: the score, then each mistake with the correct answer.
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Score: {}/{}\n", self.score, self.total)];
        if self.is_perfect() {
            lines.push("Perfect!".to_string());
        } else {
            lines.push("Mistakes:".to_string());
            for m in &self.mistakes {
                let chosen = if m.chosen.is_empty() {
                    "(none)"
                } else {
                    m.chosen.as_str()
                };
                lines.push(format!("  Q{}: {}", m.index + 1, m.question.prompt));
                lines.push(format!("    Your answer: {chosen}"));
                lines.push(format!("    Correct:     {}", m.question.answer));
            }
        }
        lines.join("\n")
    }
}

/// One run through the quiz for a single player.
#[derive(Debug, Clone)]
pub struct QuizSession {
    player: String,
    level: String,
    questions: Vec<Question>,
}

impl QuizSession {
    /// Draw up to [`QUIZ_LENGTH`] questions for `level`.
    ///
    /// When the level has fewer than [`QUIZ_LENGTH`] questions the whole
    /// bank becomes the pool. A bank smaller than that yields a shorter
    /// quiz.
    pub fn start<R: Rng + ?Sized>(bank: &QuizBank, level: &str, player: &str, rng: &mut R) -> Self {
        let level = level.trim().to_lowercase();
        let player = match player.trim() {
            "" => ANONYMOUS.to_string(),
            name => name.to_string(),
        };

        let mut pool = bank.questions_by_level(&level);
        if pool.len() < QUIZ_LENGTH {
            tracing::debug!(
                "level '{level}' has {} questions, drawing from the whole bank",
                pool.len()
            );
            pool = bank.all_questions();
        }

        let amount = QUIZ_LENGTH.min(pool.len());
        let questions = rand::seq::index::sample(rng, pool.len(), amount)
            .into_iter()
            .map(|i| pool[i].clone())
            .collect();

        Self {
            player,
            level,
            questions,
        }
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    /// The drawn questions, in the order they are asked.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Grade answers given in question order.
    ///
    /// Missing trailing answers count as skipped.
    pub fn grade<S: AsRef<str>>(&self, answers: &[S]) -> QuizOutcome {
        let mut score = 0;
        let mut mistakes = Vec::new();

        for (index, question) in self.questions.iter().enumerate() {
            let chosen = answers
                .get(index)
                .map(|a| a.as_ref().trim().to_uppercase())
                .unwrap_or_default();
            if question.is_correct(&chosen) {
                score += 1;
            } else {
                mistakes.push(Mistake {
                    index,
                    question: question.clone(),
                    chosen,
                });
            }
        }

        QuizOutcome {
            player: self.player.clone(),
            level: self.level.clone(),
            score,
            total: self.questions.len() as u32,
            mistakes,
        }
    }

    /// Grade the answers and append the result to the score log.
    pub fn finish<S: AsRef<str>>(
        &self,
        answers: &[S],
        log: &ScoreLog,
    ) -> Result<QuizOutcome, ScoreLogError> {
        let outcome = self.grade(answers);
        log.append(&outcome.player, outcome.score, outcome.total)?;
        Ok(outcome)
    }
}
