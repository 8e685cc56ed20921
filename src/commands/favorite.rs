//! `fav add` copies a catalog record into favorites; `fav rm` removes one.

use super::{Context, confirmer, print_outcome};
use crate::actions::{add_favorite, remove_favorite};
use crate::api::MovieApi;
use crate::error::Result;
use crate::types::{Collection, Movie};

pub async fn cmd_fav_add(id: &str, output_json: bool) -> Result<()> {
    let ctx = Context::load()?;
    let movie = ctx.api.get(Collection::Movies, id).await?;
    let outcome = add_favorite(&ctx.api, &ctx.session, &movie).await?;
    print_outcome("fav add", &outcome, output_json)
}

pub async fn cmd_fav_rm(id: &str, yes: bool, output_json: bool) -> Result<()> {
    let ctx = Context::load()?;
    // No list is held between invocations, so there is nothing local to prune
    let mut local: Vec<Movie> = Vec::new();
    let outcome = remove_favorite(&ctx.api, &ctx.session, id, &confirmer(yes), &mut local).await?;
    print_outcome("fav rm", &outcome, output_json)
}
