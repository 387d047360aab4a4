//! Arithmetic question generation
//!
//! Questions are drawn from a caller-owned random source so that a seeded
//! generator reproduces the same worksheet.
//!
//! # Example
//!
//! ```
//! use quest_core::question::{generate_questions, Operator};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let lines: Vec<String> =
//!     generate_questions(&mut rng, 4, &[Operator::Add], false).unwrap().collect();
//! assert_eq!(lines.len(), 4);
//! ```

mod generator;
mod model;

pub use generator::{generate_questions, QuestionGenerator};
pub use model::{Operator, Question, MAX_OPERAND};
