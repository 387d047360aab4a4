//! Random question generator

use super::model::{Operator, Question, MAX_OPERAND};
use crate::error::{QuestError, Result};
use rand::Rng;

/// Lazy, finite sequence of randomly drawn questions
///
/// Every question is drawn independently from the borrowed random source.
/// The generator yields exactly the requested number of items.
pub struct QuestionGenerator<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    remaining: usize,
    operators: Vec<Operator>,
}

impl<'a, R: Rng + ?Sized> QuestionGenerator<'a, R> {
    /// Create a generator for `count` questions over `operators`
    pub fn new(rng: &'a mut R, count: usize, operators: &[Operator]) -> Result<Self> {
        if operators.is_empty() {
            return Err(QuestError::Validation(
                "at least one operator is required".to_string(),
            ));
        }

        Ok(Self {
            rng,
            remaining: count,
            operators: operators.to_vec(),
        })
    }

    fn draw(&mut self) -> Question {
        let first = self.rng.gen_range(0..=MAX_OPERAND);
        let operator = self.operators[self.rng.gen_range(0..self.operators.len())];
        let second = match operator {
            Operator::Add => self.rng.gen_range(first..=MAX_OPERAND) - first,
            Operator::Subtract => self.rng.gen_range(0..=first),
            Operator::Multiply => self.rng.gen_range(0..=MAX_OPERAND),
        };
        Question::new(first, operator, second)
    }
}

impl<R: Rng + ?Sized> Iterator for QuestionGenerator<'_, R> {
    type Item = Question;

    fn next(&mut self) -> Option<Question> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.draw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng + ?Sized> ExactSizeIterator for QuestionGenerator<'_, R> {}

/// Generate `count` rendered questions, optionally with answers
pub fn generate_questions<'a, R: Rng + ?Sized>(
    rng: &'a mut R,
    count: usize,
    operators: &[Operator],
    with_answer: bool,
) -> Result<impl Iterator<Item = String> + 'a> {
    let generator = QuestionGenerator::new(rng, count, operators)?;
    Ok(generator.map(move |q| q.render(with_answer)))
}
