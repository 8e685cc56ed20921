use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, Context, movie_json};
use crate::api::MovieApi;
use crate::catalog::{SortKey, count_label, sort};
use crate::display::{format_movie_line, format_movie_table};
use crate::error::Result;
use crate::types::{Collection, Movie, featured};

/// List a collection in the requested order
pub async fn cmd_ls(
    collection: Collection,
    sort_key: SortKey,
    table: bool,
    output_json: bool,
) -> Result<()> {
    let sort_key = sort_key.check_for(collection)?;
    let ctx = Context::load()?;
    let movies = sort::sorted(&ctx.api.list(collection).await?, sort_key);

    let label = count_label(collection, false, movies.len());
    list_output(&movies, &label, table).print(output_json)
}

/// Show the featured strip: the first records of the catalog
pub async fn cmd_featured(output_json: bool) -> Result<()> {
    let ctx = Context::load()?;
    let movies = ctx.api.list(Collection::Movies).await?;
    let head = featured(&movies);

    list_output(head, "Featured movies", false).print(output_json)
}

pub(super) fn list_output(movies: &[Movie], heading: &str, table: bool) -> CommandOutput {
    let json_movies: Vec<_> = movies.iter().map(movie_json).collect();

    let text = if movies.is_empty() {
        format!("{}\n{}", heading.bold(), "No movies found".dimmed())
    } else if table {
        format!("{}\n{}", heading.bold(), format_movie_table(movies))
    } else {
        let lines: Vec<String> = movies.iter().map(format_movie_line).collect();
        format!("{}\n{}", heading.bold(), lines.join("\n"))
    };

    CommandOutput::new(json!({
        "label": heading,
        "count": movies.len(),
        "movies": json_movies,
    }))
    .with_text(text)
}
