//! The `carcoach quiz` command.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use carcoach_core::config::DataPaths;
use carcoach_core::quiz::{BankCache, Level, Question};
use carcoach_core::scores::ScoreLog;
use carcoach_core::session::QuizSession;

pub fn execute(
    paths: &DataPaths,
    name: Option<String>,
    level: Level,
    answers: Option<String>,
    seed: Option<u64>,
    format: String,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format '{format}', expected text or json"
    );

    let mut cache = BankCache::new(&paths.quiz_bank);
    let bank = match cache.get() {
        Ok(bank) => bank,
        Err(e) if e.is_not_found() => {
            println!("No quiz available: {e}.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };
    let session = QuizSession::start(
        bank,
        &level.to_string(),
        name.as_deref().unwrap_or(""),
        &mut *rng,
    );

    if session.is_empty() {
        println!("The quiz bank has no questions.");
        return Ok(());
    }

    let answers: Vec<String> = match answers {
        Some(list) => list.split(',').map(|a| a.trim().to_string()).collect(),
        None => ask(&session)?,
    };

    let log = ScoreLog::new(&paths.scores);
    let outcome = session.finish(&answers, &log)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.summary());
    }

    Ok(())
}

/// Ask each question on stdout and read one answer per line from stdin.
fn ask(session: &QuizSession) -> Result<Vec<String>> {
    println!(
        "Quiz ({}, {} questions)",
        capitalize(session.level()),
        session.len()
    );
    println!("Name: {}\n", session.player());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut answers = Vec::with_capacity(session.len());

    for (i, question) in session.questions().iter().enumerate() {
        print_question(i, question);
        print!("Your answer: ");
        io::stdout().flush()?;

        let answer = match lines.next() {
            Some(line) => line.context("failed to read answer")?,
            None => String::new(),
        };
        answers.push(answer.trim().to_uppercase());
        println!();
    }

    Ok(answers)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn print_question(index: usize, question: &Question) {
    println!("Q{}. {}", index + 1, question.prompt);
    for (i, option) in question.options.iter().enumerate() {
        let letter = question.option_letter(i).unwrap_or_default();
        if option.starts_with(&format!("{letter})")) {
            println!("   {option}");
        } else {
            println!("   {letter}) {option}");
        }
    }
}
