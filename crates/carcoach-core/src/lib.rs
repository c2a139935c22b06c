//! carcoach-core — facts glossary, road-rules quiz and loan math.
//!
//! This crate holds the file formats and calculations behind the carcoach
//! dashboard. Front ends call into it with plain strings and numbers and get
//! plain values or tagged errors back.

pub mod config;
pub mod error;
pub mod facts;
pub mod loan;
pub mod quiz;
pub mod scores;
pub mod session;

pub use error::{LoadError, LoanError, ScoreLogError};
pub use facts::{load_facts, FactStore};
pub use loan::{format_money, monthly_payment, total_payment, LoanQuote};
pub use quiz::{load_bank, BankCache, Level, Question, QuizBank};
pub use scores::{append_score, read_scores, ScoreLog, ScoreRecord};
pub use session::{QuizOutcome, QuizSession};
