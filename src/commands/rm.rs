use super::{Context, confirmer, print_outcome};
use crate::actions::delete_movie;
use crate::error::Result;

/// Delete a movie from the catalog
pub async fn cmd_rm(id: &str, yes: bool, output_json: bool) -> Result<()> {
    let ctx = Context::load()?;
    let outcome = delete_movie(&ctx.api, &ctx.session, id, &confirmer(yes)).await?;
    print_outcome("rm", &outcome, output_json)
}
