//! Question and operator types

use crate::error::QuestError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest value either operand of an addition or subtraction may take,
/// and the upper bound of every sum.
pub const MAX_OPERAND: u32 = 10;

/// Arithmetic operator of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition, the sum never exceeds [`MAX_OPERAND`]
    #[serde(rename = "+", alias = "add")]
    Add,
    /// Subtraction, the difference is never negative
    #[serde(rename = "-", alias = "sub")]
    Subtract,
    /// Multiplication, both operands independently in `0..=MAX_OPERAND`
    #[serde(rename = "×", alias = "x", alias = "*", alias = "mul")]
    Multiply,
}

impl Operator {
    /// Every operator the generator knows how to draw
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    /// Operators used when nothing else is configured
    pub fn default_set() -> Vec<Operator> {
        vec![Operator::Add, Operator::Subtract]
    }

    /// Single-character symbol used when rendering
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = QuestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" | "add" => Ok(Operator::Add),
            "-" | "sub" => Ok(Operator::Subtract),
            "×" | "x" | "*" | "mul" => Ok(Operator::Multiply),
            other => Err(QuestError::UnknownOperator(other.to_string())),
        }
    }
}

/// A single arithmetic question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Left operand
    pub first: u32,
    /// Operator between the operands
    pub operator: Operator,
    /// Right operand
    pub second: u32,
}

impl Question {
    /// Create a question from its parts
    pub fn new(first: u32, operator: Operator, second: u32) -> Self {
        Self {
            first,
            operator,
            second,
        }
    }

    /// Computed result of the question
    pub fn answer(&self) -> i64 {
        let (first, second) = (i64::from(self.first), i64::from(self.second));
        match self.operator {
            Operator::Add => first + second,
            Operator::Subtract => first - second,
            Operator::Multiply => first * second,
        }
    }

    /// Render the question as a fixed-width token, e.g. ` 1 + 2 =`.
    ///
    /// With `with_answer` the answer follows the equals sign in a two-wide
    /// field: ` 1 + 2 =  3`.
    pub fn render(&self, with_answer: bool) -> String {
        let expr = format!("{:>2} {}{:>2} =", self.first, self.operator, self.second);
        if with_answer {
            format!("{} {:>2}", expr, self.answer())
        } else {
            expr
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
