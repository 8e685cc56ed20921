//! Declarative validation for the movie and feedback forms.
//!
//! Each form is checked against a [`RuleSet`]: an ordered table of
//! `field -> predicate -> message` entries. For every field the first
//! failing predicate wins, so a field reports at most one message.
//! Validation runs entirely client-side; nothing is sent on failure.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{MarqueeError, Result};
use crate::types::{Genre, NewMovie};

// ============================================================================
// Constants
// ============================================================================

pub const MIN_DURATION_MINUTES: u32 = 60;
pub const MAX_DURATION_MINUTES: u32 = 300;

/// The release-year picker offers this many years back from the current one.
pub const RELEASE_YEAR_WINDOW: i32 = 20;

pub const MIN_SUMMARY_LENGTH: usize = 10;
pub const MIN_TITLE_LENGTH: usize = 2;
pub const MAX_RATING: f64 = 5.0;

pub const MIN_FEEDBACK_NAME_LENGTH: usize = 2;
pub const MIN_FEEDBACK_MESSAGE_LENGTH: usize = 20;
pub const MAX_FEEDBACK_MESSAGE_LENGTH: usize = 500;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should be valid")
});

// ============================================================================
// Rule table
// ============================================================================

type Predicate<F> = Box<dyn Fn(&F) -> bool + Send + Sync>;

struct Rule<F> {
    check: Predicate<F>,
    message: &'static str,
}

struct FieldRules<F> {
    field: &'static str,
    rules: Vec<Rule<F>>,
}

/// Ordered validation rules for a form type `F`.
pub struct RuleSet<F> {
    fields: Vec<FieldRules<F>>,
}

impl<F> Default for RuleSet<F> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<F> RuleSet<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for `field`. Rules for the same field are checked in the
    /// order they were added.
    pub fn rule<P>(mut self, field: &'static str, check: P, message: &'static str) -> Self
    where
        P: Fn(&F) -> bool + Send + Sync + 'static,
    {
        let rule = Rule {
            check: Box::new(check),
            message,
        };
        match self.fields.iter_mut().find(|f| f.field == field) {
            Some(existing) => existing.rules.push(rule),
            None => self.fields.push(FieldRules {
                field,
                rules: vec![rule],
            }),
        }
        self
    }

    /// Names of all fields covered by this rule set, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.field)
    }

    /// Check `form`, collecting the first failing message of every field.
    pub fn validate(&self, form: &F) -> std::result::Result<(), FieldErrors> {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter_map(|field| {
                field
                    .rules
                    .iter()
                    .find(|rule| !(rule.check)(form))
                    .map(|rule| FieldError {
                        field: field.field,
                        message: rule.message,
                    })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldErrors(errors))
        }
    }
}

/// A single inline message attached to a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Per-field validation failures, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    /// Message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<FieldErrors> for MarqueeError {
    fn from(errors: FieldErrors) -> Self {
        MarqueeError::Validation(errors)
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn looks_like_url(s: &str) -> bool {
    let s = s.trim();
    s.starts_with("http") && s.contains('.')
}

pub fn current_year() -> i32 {
    i32::from(jiff::Zoned::now().year())
}

// ============================================================================
// Movie form
// ============================================================================

/// Raw input of the add-movie form, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieForm {
    pub poster: String,
    pub title: String,
    pub genre: String,
    pub duration: String,
    pub release_year: String,
    pub rating: f64,
    pub summary: String,
}

impl MovieForm {
    /// Validate against the movie rules for the current calendar year.
    pub fn validate(&self) -> std::result::Result<(), FieldErrors> {
        movie_rules(current_year()).validate(self)
    }

    /// Validate and convert into a create payload.
    pub fn to_new_movie(&self) -> Result<NewMovie> {
        self.validate()?;
        self.parse_fields()
    }

    fn parse_fields(&self) -> Result<NewMovie> {
        let invalid = |field: &str| MarqueeError::Other(format!("unparseable {field}"));
        Ok(NewMovie {
            poster: self.poster.trim().to_string(),
            title: self.title.trim().to_string(),
            genre: Genre::from_str(&self.genre)?,
            duration: self
                .duration
                .trim()
                .parse()
                .map_err(|_| invalid("duration"))?,
            release_year: self
                .release_year
                .trim()
                .parse()
                .map_err(|_| invalid("release year"))?,
            rating: self.rating,
            summary: self.summary.trim().to_string(),
        })
    }

    /// Reset every field to its empty value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Rules for the add-movie form. `current_year` anchors the release-year window.
pub fn movie_rules(current_year: i32) -> RuleSet<MovieForm> {
    let oldest_year = current_year - (RELEASE_YEAR_WINDOW - 1);

    RuleSet::new()
        .rule(
            "poster",
            |f: &MovieForm| !is_blank(&f.poster),
            "Poster URL is required",
        )
        .rule(
            "poster",
            |f: &MovieForm| looks_like_url(&f.poster),
            "Please enter a valid URL",
        )
        .rule("title", |f: &MovieForm| !is_blank(&f.title), "Title is required")
        .rule(
            "title",
            |f: &MovieForm| f.title.trim().chars().count() >= MIN_TITLE_LENGTH,
            "Title must be at least 2 characters",
        )
        .rule(
            "genre",
            |f: &MovieForm| Genre::from_str(&f.genre).is_ok(),
            "Please select a genre",
        )
        .rule(
            "duration",
            |f: &MovieForm| !is_blank(&f.duration),
            "Duration is required",
        )
        .rule(
            "duration",
            |f: &MovieForm| f.duration.trim().parse::<u32>().is_ok(),
            "Duration must be a whole number of minutes",
        )
        .rule(
            "duration",
            |f: &MovieForm| {
                f.duration
                    .trim()
                    .parse::<u32>()
                    .is_ok_and(|d| d >= MIN_DURATION_MINUTES)
            },
            "Duration must be at least 60 minutes",
        )
        .rule(
            "duration",
            |f: &MovieForm| {
                f.duration
                    .trim()
                    .parse::<u32>()
                    .is_ok_and(|d| d <= MAX_DURATION_MINUTES)
            },
            "Duration cannot exceed 300 minutes",
        )
        .rule(
            "releaseYear",
            |f: &MovieForm| !is_blank(&f.release_year),
            "Release year is required",
        )
        .rule(
            "releaseYear",
            move |f: &MovieForm| {
                f.release_year
                    .trim()
                    .parse::<i32>()
                    .is_ok_and(|y| (oldest_year..=current_year).contains(&y))
            },
            "Please select a release year from the last 20 years",
        )
        .rule(
            "rating",
            |f: &MovieForm| f.rating > 0.0,
            "Please rate the movie",
        )
        .rule(
            "rating",
            |f: &MovieForm| f.rating <= MAX_RATING,
            "Rating cannot exceed 5",
        )
        .rule(
            "summary",
            |f: &MovieForm| !is_blank(&f.summary),
            "Summary is required",
        )
        .rule(
            "summary",
            |f: &MovieForm| f.summary.trim().chars().count() >= MIN_SUMMARY_LENGTH,
            "Summary must be at least 10 characters",
        )
}

// ============================================================================
// Feedback form
// ============================================================================

/// Raw input of the feedback form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    /// Star rating, 0 when nothing was picked
    pub rating: u8,
    pub message: String,
}

impl FeedbackForm {
    pub fn validate(&self) -> std::result::Result<(), FieldErrors> {
        feedback_rules().validate(self)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn feedback_rules() -> RuleSet<FeedbackForm> {
    RuleSet::new()
        .rule(
            "name",
            |f: &FeedbackForm| !is_blank(&f.name),
            "Name is required",
        )
        .rule(
            "name",
            |f: &FeedbackForm| f.name.trim().chars().count() >= MIN_FEEDBACK_NAME_LENGTH,
            "Name must be at least 2 characters",
        )
        .rule(
            "email",
            |f: &FeedbackForm| !is_blank(&f.email),
            "Email is required",
        )
        .rule(
            "email",
            |f: &FeedbackForm| EMAIL_RE.is_match(f.email.trim()),
            "Please enter a valid email address",
        )
        .rule(
            "rating",
            |f: &FeedbackForm| f.rating >= 1,
            "Please select a rating",
        )
        .rule(
            "rating",
            |f: &FeedbackForm| f.rating <= 5,
            "Rating must be between 1 and 5",
        )
        .rule(
            "message",
            |f: &FeedbackForm| !is_blank(&f.message),
            "Feedback is required",
        )
        .rule(
            "message",
            |f: &FeedbackForm| f.message.chars().count() >= MIN_FEEDBACK_MESSAGE_LENGTH,
            "Please provide at least 20 characters",
        )
        .rule(
            "message",
            |f: &FeedbackForm| f.message.chars().count() <= MAX_FEEDBACK_MESSAGE_LENGTH,
            "Feedback must be less than 500 characters",
        )
}
