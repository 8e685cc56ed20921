use super::{CommandOutput, Context, movie_json};
use crate::api::MovieApi;
use crate::display::format_movie_detail;
use crate::error::Result;
use crate::types::Collection;

/// Display a single record
pub async fn cmd_show(id: &str, collection: Collection, output_json: bool) -> Result<()> {
    let ctx = Context::load()?;
    let movie = ctx.api.get(collection, id).await?;

    CommandOutput::new(movie_json(&movie))
        .with_text(format_movie_detail(&movie))
        .print(output_json)
}
