use super::{Context, print_outcome};
use crate::actions::create_movie;
use crate::error::Result;
use crate::validation::MovieForm;

/// Options for adding a movie, as typed on the command line
pub struct AddOptions {
    pub poster: String,
    pub title: String,
    pub genre: String,
    pub duration: String,
    pub release_year: String,
    pub rating: f64,
    pub summary: String,
}

impl From<AddOptions> for MovieForm {
    fn from(opts: AddOptions) -> Self {
        MovieForm {
            poster: opts.poster,
            title: opts.title,
            genre: opts.genre,
            duration: opts.duration,
            release_year: opts.release_year,
            rating: opts.rating,
            summary: opts.summary,
        }
    }
}

/// Validate and submit a new movie
pub async fn cmd_add(options: AddOptions, output_json: bool) -> Result<()> {
    let ctx = Context::load()?;
    let mut form = MovieForm::from(options);

    let outcome = create_movie(&ctx.api, &ctx.session, &mut form).await?;
    print_outcome("add", &outcome, output_json)
}
