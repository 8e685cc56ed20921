//! Catalog browser command (`marquee browse`)

use std::sync::Arc;

use iocraft::prelude::*;
use parking_lot::Mutex;

use super::Context;
use crate::api::MovieApi;
use crate::catalog::{CatalogView, SortKey};
use crate::error::{MarqueeError, Result};
use crate::tui::{BrowseContext, CatalogBrowser};
use crate::types::Collection;

/// Load the seed list, then hand the terminal to the browser until it quits
pub async fn cmd_browse(collection: Collection, sort_key: SortKey) -> Result<()> {
    let sort_key = sort_key.check_for(collection)?;
    let ctx = Context::load()?;
    let api = Arc::new(ctx.api);
    let seed = api.list(collection).await?;

    let mut view = CatalogView::new(api.clone(), collection, seed);
    view.set_sort_key(sort_key);

    let context = BrowseContext {
        catalog: Arc::new(Mutex::new(view)),
        api,
        session: ctx.session,
    };

    element!(CatalogBrowser(context: Some(context)))
        .fullscreen()
        .await
        .map_err(|e| MarqueeError::Other(format!("TUI error: {e}")))
}
