//! Session orchestration: one participant's pass through the experiment.
//!
//! ## Responsibilities
//!
//! - Condition assignment: pick an urn size and an unknown-urn side
//!   uniformly from the configured lists at session start
//! - Intake: record consent and validated demographics
//! - Resolution: map the participant's click to the unknown-or-known urn,
//!   draw once, map blue to win and red to loss
//! - Record: produce the persisted results row
//!
//! ## Design
//!
//! - The session owns its urn exclusively; nothing here is shared or
//!   concurrent
//! - Steps fail loudly when called out of order (resolve before choose,
//!   record before resolve)

use serde::{Deserialize, Serialize};

use crate::{
    config::{ConfigError, ExperimentConfig},
    env::Environment,
    outcome::{self, Outcome, OutcomeError, Side},
    record::Record,
    urn::{Color, Urn, UrnError},
};

/// Errors from session setup, intake, and resolution.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Configuration rejected before assignment.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Urn construction or mutation failed.
    #[error("urn error: {0}")]
    Urn(#[from] UrnError),

    /// Side-code resolution failed.
    #[error("outcome error: {0}")]
    Outcome(#[from] OutcomeError),

    /// Participant is below the configured minimum age.
    #[error("participant age {age} is below the minimum of {min}")]
    TooYoung {
        /// Submitted age.
        age: u32,
        /// Configured minimum.
        min: u32,
    },

    /// Participant is above the configured maximum age.
    #[error("participant age {age} is above the maximum of {max}")]
    TooOld {
        /// Submitted age.
        age: u32,
        /// Configured maximum.
        max: u32,
    },

    /// Gender not in the configured option list.
    #[error("unrecognized gender option: {value}")]
    UnrecognizedGender {
        /// Submitted value.
        value: String,
    },

    /// Education level not in the configured option list.
    #[error("unrecognized education option: {value}")]
    UnrecognizedEducation {
        /// Submitted value.
        value: String,
    },

    /// Consent was not given.
    #[error("consent has not been given")]
    MissingConsent,

    /// Demographics have not been recorded.
    #[error("demographics have not been recorded")]
    MissingDemographics,

    /// The participant has not selected an urn.
    #[error("no urn has been selected")]
    NoChoice,

    /// The session has not been resolved yet.
    #[error("the session has not been resolved")]
    NotResolved,
}

/// Validated participant attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    /// Participant age, within the configured bounds.
    pub age: u32,
    /// Participant gender, one of the configured options.
    pub gender: String,
    /// Participant education level, one of the configured options.
    pub education: String,
}

impl Demographics {
    /// Validate raw intake values against the experiment configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::TooYoung`] / [`SessionError::TooOld`] for
    /// out-of-bounds ages, and `Unrecognized*` errors for options not in
    /// the configured lists.
    pub fn new(
        config: &ExperimentConfig,
        age: u32,
        gender: &str,
        education: &str,
    ) -> Result<Self, SessionError> {
        if age < config.min_age {
            return Err(SessionError::TooYoung { age, min: config.min_age });
        }
        if age > config.max_age {
            return Err(SessionError::TooOld { age, max: config.max_age });
        }
        if !config.genders.iter().any(|option| option == gender) {
            return Err(SessionError::UnrecognizedGender { value: gender.to_string() });
        }
        if !config.educations.iter().any(|option| option == education) {
            return Err(SessionError::UnrecognizedEducation { value: education.to_string() });
        }

        Ok(Self { age, gender: gender.to_string(), education: education.to_string() })
    }
}

/// Result of resolving a session: the drawn ball and the mapped outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    /// Color of the drawn ball.
    pub drawn: Color,
    /// Win/loss mapping of the draw.
    pub outcome: Outcome,
}

impl SessionResult {
    /// Whether the participant won (drew blue).
    pub fn won(&self) -> bool {
        self.outcome.won()
    }
}

/// One participant's session, from condition assignment to the final
/// record.
///
/// The urn is created once at assignment time and destroyed with the
/// session; there is no persistence beyond the emitted [`Record`].
#[derive(Debug, Clone)]
pub struct Session {
    consent: bool,
    demographics: Option<Demographics>,
    urn_size: u32,
    urn: Urn,
    unknown_side: Side,
    choice: Option<Side>,
    drawn: Option<Color>,
}

impl Session {
    /// Start a session: validate the configuration and assign conditions.
    ///
    /// The urn size and the unknown urn's display side are each drawn
    /// uniformly from the configured lists. The urn's composition is
    /// sampled eagerly here (see [`Urn::new`]), before anyone knows which
    /// urn the participant will pick.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Config`] for an invalid configuration and
    /// [`SessionError::Urn`] if urn construction fails.
    pub fn new<E: Environment>(
        config: &ExperimentConfig,
        env: &E,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        let urn_size = *env.pick(&config.urn_sizes).ok_or(ConfigError::NoUrnSizes)?;
        let unknown_side = *env.pick(&config.sides).ok_or(ConfigError::NoSides)?;
        let urn = Urn::new(env, urn_size, false)?;

        tracing::debug!(urn_size, unknown_side = %unknown_side, "assigned session condition");

        Ok(Self {
            consent: false,
            demographics: None,
            urn_size,
            urn,
            unknown_side,
            choice: None,
            drawn: None,
        })
    }

    /// Record whether the participant consented.
    pub fn record_consent(&mut self, consent: bool) {
        self.consent = consent;
    }

    /// Whether consent has been given.
    pub fn consented(&self) -> bool {
        self.consent
    }

    /// Record validated demographics.
    pub fn record_demographics(&mut self, demographics: Demographics) {
        self.demographics = Some(demographics);
    }

    /// Recorded demographics, if any.
    pub fn demographics(&self) -> Option<&Demographics> {
        self.demographics.as_ref()
    }

    /// The assigned urn size.
    pub fn urn_size(&self) -> u32 {
        self.urn_size
    }

    /// The session's urn.
    pub fn urn(&self) -> &Urn {
        &self.urn
    }

    /// Which side the unknown urn is rendered on.
    pub fn unknown_side(&self) -> Side {
        self.unknown_side
    }

    /// The participant's selection, if made.
    pub fn choice(&self) -> Option<Side> {
        self.choice
    }

    /// The drawn color, once resolved.
    pub fn drawn(&self) -> Option<Color> {
        self.drawn
    }

    /// Record which urn the participant clicked.
    pub fn choose(&mut self, side: Side) {
        self.choice = Some(side);
    }

    /// Resolve the session: fix the urn's mode from the combination table,
    /// draw once, and map the result.
    ///
    /// The urn's `unknown` flag is set from whether the selected side held
    /// the unknown urn; the draw then runs under that mode against the
    /// composition fixed at assignment time.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoChoice`] if the participant has not
    /// selected an urn.
    pub fn resolve<E: Environment>(&mut self, env: &E) -> Result<SessionResult, SessionError> {
        let choice = self.choice.ok_or(SessionError::NoChoice)?;

        let picked_unknown = outcome::selected_is_unknown(choice, self.unknown_side);
        self.urn.set_unknown(picked_unknown);

        let drawn = self.urn.draw(env);
        self.drawn = Some(drawn);

        let outcome = Outcome::from_color(drawn);
        tracing::debug!(
            choice = %choice,
            unknown_side = %self.unknown_side,
            picked_unknown,
            drawn = %drawn,
            outcome = %outcome,
            "session resolved"
        );

        Ok(SessionResult { drawn, outcome })
    }

    /// Produce the persisted results row for this session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingConsent`],
    /// [`SessionError::MissingDemographics`], [`SessionError::NoChoice`],
    /// or [`SessionError::NotResolved`] if the corresponding step has not
    /// completed.
    pub fn record(&self) -> Result<Record, SessionError> {
        if !self.consent {
            return Err(SessionError::MissingConsent);
        }
        let demographics = self.demographics.as_ref().ok_or(SessionError::MissingDemographics)?;
        let choice = self.choice.ok_or(SessionError::NoChoice)?;
        let drawn = self.drawn.ok_or(SessionError::NotResolved)?;

        Ok(Record {
            age: demographics.age,
            gender: demographics.gender.clone(),
            education: demographics.education.clone(),
            urn_size: self.urn_size,
            unknown_side: self.unknown_side,
            choice,
            drawn,
        })
    }

    /// Human-readable state summary.
    pub fn describe(&self) -> String {
        let age = self.demographics.as_ref().map_or(0, |d| d.age);
        let gender = self.demographics.as_ref().map_or("", |d| d.gender.as_str());
        let education = self.demographics.as_ref().map_or("", |d| d.education.as_str());
        let choice = self.choice.map_or_else(|| "-".to_string(), |side| side.to_string());

        format!(
            "Session: [Consent: {}, Age: {}, Education: {}, Gender: {}, Urn Size: {}, Choice: {}]",
            self.consent, age, education, gender, self.urn_size, choice,
        )
    }

    /// Force the session's urn, bypassing assignment.
    ///
    /// Testing hook for scripted scenarios (e.g. an all-red urn); the urn
    /// must respect the session's assigned size for records to stay
    /// coherent.
    #[doc(hidden)]
    pub fn replace_urn(&mut self, urn: Urn) {
        self.urn_size = urn.size();
        self.urn = urn;
    }
}
