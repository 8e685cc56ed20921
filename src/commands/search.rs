use std::sync::Arc;

use owo_colors::OwoColorize;

use super::Context;
use super::ls::list_output;
use crate::api::MovieApi;
use crate::catalog::{CatalogView, SortKey};
use crate::error::{MarqueeError, Result};
use crate::types::Collection;

/// Search a collection once, through the same view the interactive screens use.
///
/// The seed list is loaded first; a blank query prints it unchanged.
pub async fn cmd_search(
    query: &str,
    collection: Collection,
    sort_key: SortKey,
    table: bool,
    output_json: bool,
) -> Result<()> {
    let sort_key = sort_key.check_for(collection)?;
    let ctx = Context::load()?;
    let api = Arc::new(ctx.api);
    let seed = api.list(collection).await?;

    let mut view = CatalogView::new(api, collection, seed);
    view.set_sort_key(sort_key);

    let mut rx = view.subscribe();
    view.submit_query(query);
    let state = rx
        .wait_for(|s| !s.loading)
        .await
        .map_err(|_| MarqueeError::Other("search was interrupted".to_string()))?
        .clone();

    if let Some(error) = state.error {
        eprintln!("{} {}", "warning:".yellow(), error);
        return Err(MarqueeError::Other(error));
    }

    let heading = if query.trim().is_empty() {
        view.count_label()
    } else {
        format!("{} for \"{}\"", view.count_label(), query.trim())
    };
    list_output(&view.visible(), &heading, table).print(output_json)
}
