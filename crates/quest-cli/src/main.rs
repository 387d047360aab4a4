//! gen-quest - arithmetic worksheet generator
//!
//! Generates randomized addition, subtraction and multiplication questions
//! and exports them as plain-text columns or as a table document.
//!
//! ## Quick Start
//!
//! ```bash
//! # 100 questions in two columns on stdout
//! gen-quest
//!
//! # 60 questions with answers, four per row, as quest.docx
//! gen-quest -q 60 -c 4 -e docx --with-answer
//!
//! # Reproduce a sheet
//! gen-quest --seed 42 -e doc -f week-1
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
