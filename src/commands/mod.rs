mod add;
mod browse;
mod config;
mod favorite;
mod feedback;
mod ls;
mod rm;
mod search;
mod show;

pub use add::{AddOptions, cmd_add};
pub use browse::cmd_browse;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show, cmd_config_unset, cmd_whoami};
pub use favorite::{cmd_fav_add, cmd_fav_rm};
pub use feedback::{FeedbackOptions, cmd_feedback};
pub use ls::{cmd_featured, cmd_ls};
pub use rm::cmd_rm;
pub use search::cmd_search;
pub use show::cmd_show;

use serde_json::{Value, json};

use crate::actions::{AssumeYes, Confirm, Outcome, StdinConfirm};
use crate::api::HttpMovieApi;
use crate::config::Config;
use crate::error::Result;
use crate::session::Session;
use crate::types::Movie;

/// Output of a command: always has a JSON form, optionally a text form.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print JSON when requested or when there is no text form.
    pub fn print(self, output_json: bool) -> Result<()> {
        match self.text {
            Some(text) if !output_json => println!("{text}"),
            _ => print_json(&self.json)?,
        }
        Ok(())
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Configuration, identity and API client shared by the network commands.
pub(crate) struct Context {
    pub session: Session,
    pub api: HttpMovieApi,
}

impl Context {
    pub fn load() -> Result<Self> {
        let config = Config::load()?;
        let session = Session::from_config(&config);
        let api = HttpMovieApi::from_config(&config)?;
        Ok(Self { session, api })
    }
}

/// `--yes` skips the prompt; otherwise ask on stdin.
pub(crate) fn confirmer(yes: bool) -> Box<dyn Confirm + Send + Sync> {
    if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    }
}

impl Confirm for Box<dyn Confirm + Send + Sync> {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        (**self).confirm(prompt)
    }
}

pub(crate) fn movie_json(movie: &Movie) -> Value {
    json!({
        "id": movie.id,
        "title": movie.title,
        "genre": movie.genre,
        "poster": movie.poster,
        "duration": movie.duration,
        "release_year": movie.release_year,
        "rating": movie.rating,
        "summary": movie.summary,
    })
}

pub(crate) fn outcome_json(action: &str, outcome: &Outcome) -> Value {
    json!({
        "action": action,
        "done": outcome.is_done(),
        "cancelled": matches!(outcome, Outcome::Cancelled),
        "message": outcome.message(),
        "route": outcome.route().map(|r| r.to_string()),
        "id": match outcome {
            Outcome::Done { id, .. } => id.clone(),
            _ => None,
        },
    })
}

/// Print an action outcome the same way for every mutating command.
pub(crate) fn print_outcome(action: &str, outcome: &Outcome, output_json: bool) -> Result<()> {
    use owo_colors::OwoColorize;

    let text = match outcome {
        Outcome::Done { message, route, .. } => {
            format!("{} {}  {}", "✓".green(), message, format!("→ {route}").dimmed())
        }
        Outcome::Unchanged { message } => format!("{} {}", "!".yellow(), message),
        Outcome::Cancelled => "Cancelled".dimmed().to_string(),
    };
    CommandOutput::new(outcome_json(action, outcome))
        .with_text(text)
        .print(output_json)
}
