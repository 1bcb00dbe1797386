//! Input sources for the menu and bounded numeric prompts.

use crate::catalog::Rating;
use crate::error::CatalogError;
use std::collections::VecDeque;
use std::io::Write;
use tracing::debug;

/// Source of free-text answers.
pub trait Prompter {
    /// Ask one question and return the raw answer. Errors mean the input
    /// source is gone (closed terminal, exhausted script).
    fn ask(&mut self, prompt: &str) -> Result<String, CatalogError>;
}

/// Prompter reading from the terminal through `dialoguer`.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, CatalogError> {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CatalogError::Input(format!("Failed to get user input: {}", e)))
    }
}

/// Prompter replaying a fixed list of answers. Records every prompt it was
/// asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, CatalogError> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| CatalogError::Input("no more scripted input".to_string()))
    }
}

/// Ask until `parse` accepts an answer, at most `max_attempts` times.
///
/// Every rejected answer prints a hint to `out`. Running out of attempts
/// returns `CatalogError::Validation`.
pub fn ask_parsed<T, P, W, F>(
    prompter: &mut P,
    out: &mut W,
    prompt: &str,
    max_attempts: u32,
    parse: F,
) -> Result<T, CatalogError>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
    F: Fn(&str) -> Result<T, String>,
{
    for attempt in 1..=max_attempts {
        let answer = prompter.ask(prompt)?;
        match parse(answer.trim()) {
            Ok(value) => return Ok(value),
            Err(hint) => {
                debug!(prompt, attempt, "Rejected answer");
                writeln!(out, "{} Please try again.", hint)
                    .map_err(|e| CatalogError::Output(e.to_string()))?;
            }
        }
    }
    Err(CatalogError::Validation(format!(
        "no valid answer for '{}' after {} attempt(s)",
        prompt, max_attempts
    )))
}

pub fn parse_year(answer: &str) -> Result<i32, String> {
    answer
        .parse::<i32>()
        .map_err(|_| format!("'{}' is not a valid year.", answer))
}

pub fn parse_rating(answer: &str) -> Result<Rating, String> {
    let value = answer
        .parse::<i64>()
        .map_err(|_| format!("'{}' is not a whole number.", answer))?;
    Rating::new(value).map_err(|_| {
        format!(
            "Rating must be between {} and {}.",
            Rating::MIN,
            Rating::MAX
        )
    })
}
