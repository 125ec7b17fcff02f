//! Sequential prompt flow: consent → demographics → urn choice → debrief.
//!
//! Each screen of the original study is a pure validation function over
//! the raw input; the interactive driver just loops a prompt until the
//! validator accepts, then advances. No widget hierarchy, no inheritance.
//!
//! The driver reads from any [`BufRead`] and writes to any [`Write`], so
//! the whole flow runs under tests against in-memory buffers.

use std::io::{BufRead, Write};

use ellsberg_core::{
    Demographics, Environment, ExperimentConfig, Record, ResultsSink, Session, SessionError, Side,
};

use crate::error::RunnerError;

/// Built-in consent text, shown when no `--consent-text` file is given.
pub const CONSENT_TEXT: &str = "\
You are invited to take part in a short decision-making study. You will be \
shown two urns of colored balls and asked to pick one; a single ball is \
then drawn from your chosen urn. Your age, gender, education level, and \
choice are recorded anonymously. Participation is voluntary and you may \
stop at any time.";

/// Built-in debrief text, shown when no `--debrief-text` file is given.
pub const DEBRIEF_TEXT: &str = "\
Thank you for taking part. This study looks at how people choose between \
a gamble with known odds and one with unknown odds. Your result has been \
recorded anonymously.";

/// Texts shown around the experiment proper.
#[derive(Debug, Clone)]
pub struct FlowTexts {
    /// Consent text shown before the first prompt.
    pub consent: String,
    /// Debrief text shown after the draw.
    pub debrief: String,
}

impl Default for FlowTexts {
    fn default() -> Self {
        Self { consent: CONSENT_TEXT.to_string(), debrief: DEBRIEF_TEXT.to_string() }
    }
}

impl FlowTexts {
    /// Load texts, overriding the built-in defaults from files when given.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Io`] if a given file cannot be read.
    pub fn load(
        consent_path: Option<&std::path::Path>,
        debrief_path: Option<&std::path::Path>,
    ) -> Result<Self, RunnerError> {
        let mut texts = Self::default();
        if let Some(path) = consent_path {
            texts.consent = std::fs::read_to_string(path)?;
        }
        if let Some(path) = debrief_path {
            texts.debrief = std::fs::read_to_string(path)?;
        }
        Ok(texts)
    }
}

/// Validation errors for a single prompt; shown verbatim and re-prompted.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Age input was not a number.
    #[error("Please enter a valid age (a number).")]
    NonNumericAge,

    /// Consent answer was neither yes nor no.
    #[error("Please answer yes or no.")]
    NotYesNo,

    /// Selection did not match any listed option.
    #[error("Please pick one of the listed options, by number or name.")]
    UnknownOption,

    /// Urn selection did not name either urn.
    #[error("Please pick urn A (left) or urn B (right).")]
    UnknownSide,

    /// Semantic validation failed (age bounds, option lists).
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Parse a yes/no answer.
///
/// # Errors
///
/// Returns [`FlowError::NotYesNo`] for anything else.
pub fn parse_yes_no(raw: &str) -> Result<bool, FlowError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(FlowError::NotYesNo),
    }
}

/// Parse an age entry: digits only, as the original dialog required.
///
/// # Errors
///
/// Returns [`FlowError::NonNumericAge`] for empty or non-digit input.
pub fn parse_age(raw: &str) -> Result<u32, FlowError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(FlowError::NonNumericAge);
    }
    trimmed.parse().map_err(|_| FlowError::NonNumericAge)
}

/// Resolve a selection against an option list, by 1-based number or
/// case-insensitive name.
///
/// # Errors
///
/// Returns [`FlowError::UnknownOption`] when nothing matches.
pub fn select_option<'a>(raw: &str, options: &'a [String]) -> Result<&'a str, FlowError> {
    let trimmed = raw.trim();

    if let Ok(index) = trimmed.parse::<usize>() {
        if (1..=options.len()).contains(&index) {
            return Ok(options[index - 1].as_str());
        }
        return Err(FlowError::UnknownOption);
    }

    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(trimmed))
        .map(String::as_str)
        .ok_or(FlowError::UnknownOption)
}

/// Parse an urn selection. Urn A is the left position (code 1), urn B the
/// right (code 0).
///
/// # Errors
///
/// Returns [`FlowError::UnknownSide`] for anything else.
pub fn parse_side(raw: &str) -> Result<Side, FlowError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "a" | "left" | "1" => Ok(Side::Left),
        "b" | "right" | "0" => Ok(Side::Right),
        _ => Err(FlowError::UnknownSide),
    }
}

/// Render the two urn description lines for the assigned condition.
///
/// The known urn shows its declared 50/50 mix; the unknown urn admits
/// only its size. Which line gets which text follows the session's
/// unknown-side assignment.
pub fn urn_lines(size: u32, unknown_side: Side) -> [String; 2] {
    let known = format!("50 : 50 mix of {size} balls");
    let unknown = format!("Unknown mix of {size} balls");

    match unknown_side {
        Side::Right => [format!("Urn A (left): {known}"), format!("Urn B (right): {unknown}")],
        Side::Left => [format!("Urn A (left): {unknown}"), format!("Urn B (right): {known}")],
    }
}

/// Loop a prompt until the validator accepts the input.
fn prompt_until<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    parse: F,
) -> Result<T, RunnerError>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, FlowError>,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(RunnerError::EndOfInput);
        }

        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

/// Drive one full session over the given input/output streams.
///
/// Returns `Ok(None)` when the participant declines consent (nothing is
/// recorded), `Ok(Some(record))` after a completed, persisted session.
///
/// # Errors
///
/// Returns [`RunnerError`] on I/O failure, closed input, or a session
/// driven out of order.
pub fn run_flow<E, R, W, S>(
    config: &ExperimentConfig,
    texts: &FlowTexts,
    env: &E,
    input: &mut R,
    output: &mut W,
    sink: &mut S,
) -> Result<Option<Record>, RunnerError>
where
    E: Environment,
    R: BufRead,
    W: Write,
    S: ResultsSink + ?Sized,
{
    let mut session = Session::new(config, env)?;

    // Consent screen.
    writeln!(output, "{}\n", texts.consent)?;
    let consent =
        prompt_until(input, output, "Do you consent to participate? [yes/no]: ", parse_yes_no)?;
    session.record_consent(consent);
    if !consent {
        writeln!(output, "No consent given; the session ends here. Thank you for your time.")?;
        tracing::info!("participant declined consent");
        return Ok(None);
    }

    // Demographic screen.
    let min_age = config.min_age;
    let max_age = config.max_age;
    let age = prompt_until(input, output, "Age: ", move |raw| {
        let age = parse_age(raw)?;
        if age < min_age {
            return Err(SessionError::TooYoung { age, min: min_age }.into());
        }
        if age > max_age {
            return Err(SessionError::TooOld { age, max: max_age }.into());
        }
        Ok(age)
    })?;

    writeln!(output, "Gender:")?;
    for (i, option) in config.genders.iter().enumerate() {
        writeln!(output, "  {}) {option}", i + 1)?;
    }
    let gender =
        prompt_until(input, output, "Select: ", |raw| {
            select_option(raw, &config.genders).map(str::to_string)
        })?;

    writeln!(output, "Education level:")?;
    for (i, option) in config.educations.iter().enumerate() {
        writeln!(output, "  {}) {option}", i + 1)?;
    }
    let education =
        prompt_until(input, output, "Select: ", |raw| {
            select_option(raw, &config.educations).map(str::to_string)
        })?;

    session.record_demographics(Demographics::new(config, age, &gender, &education)?);

    // Urn screen.
    writeln!(
        output,
        "\nChoose one of the two urns below. One ball will be drawn from \
         your chosen urn; a BLUE ball wins."
    )?;
    for line in urn_lines(session.urn_size(), session.unknown_side()) {
        writeln!(output, "  {line}")?;
    }
    let choice = prompt_until(input, output, "Which urn do you choose? [A/B]: ", parse_side)?;
    session.choose(choice);

    // Debrief screen.
    let result = session.resolve(env)?;
    writeln!(
        output,
        "\nYou drew a {} ball. You {}!\n",
        result.drawn.to_string().to_uppercase(),
        result.outcome,
    )?;
    writeln!(output, "{}", texts.debrief)?;

    let record = session.record()?;
    sink.append(&record)?;
    tracing::info!(line = %record.to_line(), "session recorded");

    Ok(Some(record))
}
