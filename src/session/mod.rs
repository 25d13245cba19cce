use anyhow::*;
use rand::Rng;

use crate::dataset::Dataset;
use crate::quiz::fuzzy::{self, Verdict};
use crate::quiz::pool;
use crate::quiz::question::{AnswerMode, Prompt, Question};
use crate::quiz::settings::Settings;


/// One posed question, ready for the view layer.
#[derive(Clone, Debug)]
pub struct Turn {
    pub number: usize,
    pub total: usize,
    pub prompt: Prompt,
    pub mode: AnswerMode,
}

#[derive(Clone, Debug)]
pub struct Judgement {
    pub correct: bool,
    pub canonical_answer: String,
    /// The answer was accepted despite a typo; the view must surface the
    /// canonical spelling.
    pub near_miss: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Summary {
    pub score: u32,
    pub attempted: u32,
    pub best_streak: u32,
}

#[derive(Debug)]
struct ActiveQuiz {
    questions: Vec<Question>,
    position: Option<usize>,
    mode: Option<AnswerMode>,
    answered: bool,
    score: u32,
    streak: u32,
    attempted: u32,
}

#[derive(Debug)]
enum Phase {
    Setup,
    Active(ActiveQuiz),
    Finished(Summary),
}

pub struct Session<R: Rng> {
    rng: R,
    settings: Settings,
    phase: Phase,
    best_streak: u32,
}

impl<R: Rng> Session<R> {
    pub fn new(rng: R, best_streak: u32) -> Self {
        Session {
            rng,
            settings: Settings::default(),
            phase: Phase::Setup,
            best_streak,
        }
    }

    pub fn start(
        &mut self,
        dataset: &Dataset,
        categories: &[String],
        requested_count: usize,
    ) -> Result<()> {
        match self.phase {
            Phase::Setup => (),
            _ => return Err(anyhow!("Cannot start a quiz outside of setup")),
        }
        if categories.is_empty() {
            return Err(anyhow!("No categories selected"));
        }
        let mut questions = pool::build_pool(dataset, categories, &mut self.rng);
        if questions.is_empty() {
            return Err(anyhow!("The selected categories have no questions"));
        }
        // The pool is shuffled, so its prefix is a uniform random subset
        questions.truncate(requested_count.max(1));
        self.phase = Phase::Active(ActiveQuiz {
            questions,
            position: None,
            mode: None,
            answered: false,
            score: 0,
            streak: 0,
            attempted: 0,
        });
        Ok(())
    }

    /// Moves to the next question and poses it, or finishes the quiz when
    /// none are left.
    pub fn advance(&mut self) -> Result<Option<Turn>> {
        let option_count = self.settings.option_count;
        let best_streak = self.best_streak;
        let rng = &mut self.rng;
        let quiz = match &mut self.phase {
            Phase::Active(quiz) => quiz,
            _ => return Err(anyhow!("There is no quiz in progress")),
        };

        if quiz.position.is_some() && !quiz.answered {
            return Err(anyhow!("The current question has not been answered"));
        }

        let next = quiz.position.map_or(0, |index| index + 1);
        if next >= quiz.questions.len() {
            let summary = Summary {
                score: quiz.score,
                attempted: quiz.attempted,
                best_streak,
            };
            self.phase = Phase::Finished(summary);
            return Ok(None);
        }

        quiz.position = Some(next);
        quiz.answered = false;
        let question = &quiz.questions[next];
        let mode = question.present(option_count, rng);
        let turn = Turn {
            number: next + 1,
            total: quiz.questions.len(),
            prompt: question.prompt.clone(),
            mode: mode.clone(),
        };
        quiz.mode = Some(mode);
        Ok(Some(turn))
    }

    pub fn submit(&mut self, answer: &str) -> Result<Judgement> {
        let quiz = match &mut self.phase {
            Phase::Active(quiz) => quiz,
            _ => return Err(anyhow!("There is no quiz in progress")),
        };
        let position = quiz.position.context("No question has been posed yet")?;
        if quiz.answered {
            return Err(anyhow!("This question was already answered"));
        }

        let question = &quiz.questions[position];
        let (correct, near_miss) = match &quiz.mode {
            Some(AnswerMode::FreeText) => match fuzzy::compare(answer, &question.answer) {
                Verdict::Exact => (true, false),
                Verdict::Fuzzy => (true, true),
                Verdict::NoMatch => (false, false),
            },
            _ => (answer == question.answer, false),
        };

        quiz.answered = true;
        quiz.attempted += 1;
        if correct {
            quiz.score += 1;
            quiz.streak += 1;
            if quiz.streak > self.best_streak {
                self.best_streak = quiz.streak;
            }
        } else {
            quiz.streak = 0;
        }

        Ok(Judgement {
            correct,
            canonical_answer: question.answer.clone(),
            near_miss,
        })
    }

    /// Abandons any quiz in progress. The best streak is kept.
    pub fn reset(&mut self) {
        self.phase = Phase::Setup;
    }

    pub fn score(&self) -> u32 {
        match &self.phase {
            Phase::Setup => 0,
            Phase::Active(quiz) => quiz.score,
            Phase::Finished(summary) => summary.score,
        }
    }

    pub fn streak(&self) -> u32 {
        match &self.phase {
            Phase::Active(quiz) => quiz.streak,
            _ => 0,
        }
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn summary(&self) -> Option<Summary> {
        match &self.phase {
            Phase::Finished(summary) => Some(*summary),
            _ => None,
        }
    }
}
