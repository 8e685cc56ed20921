//! Orderings for the catalog list.
//!
//! Every function here sorts a copy; the list it was given is never touched.
//! All sorts are stable, so records that compare equal keep server order.

use std::cmp::Ordering;

use unicase::UniCase;

use crate::enum_display_fromstr;
use crate::error::{MarqueeError, Result};
use crate::types::{Collection, Movie};

/// Sort key offered by the catalog screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Server order
    #[default]
    Latest,
    Title,
    Year,
    Rating,
    /// Only offered on the favorites screen
    Duration,
}

enum_display_fromstr!(
    SortKey,
    MarqueeError::InvalidSortKey,
    {
        Latest => "latest" | "default" | "none",
        Title => "title" | "name",
        Year => "year" | "release" | "releaseyear",
        Rating => "rating" | "stars",
        Duration => "duration" | "length" | "runtime",
    }
);

impl SortKey {
    /// Keys offered for a collection, in menu order.
    pub fn available_for(collection: Collection) -> &'static [SortKey] {
        match collection {
            Collection::Movies => &[
                SortKey::Latest,
                SortKey::Title,
                SortKey::Year,
                SortKey::Rating,
            ],
            Collection::Favorites => &[
                SortKey::Latest,
                SortKey::Title,
                SortKey::Year,
                SortKey::Rating,
                SortKey::Duration,
            ],
        }
    }

    /// Reject keys the collection's screen does not offer.
    pub fn check_for(self, collection: Collection) -> Result<Self> {
        if Self::available_for(collection).contains(&self) {
            Ok(self)
        } else {
            Err(MarqueeError::InvalidSortKey(format!(
                "{self} (not available for {collection})"
            )))
        }
    }

    /// Next key in the collection's menu, wrapping around.
    pub fn next_for(self, collection: Collection) -> Self {
        let keys = Self::available_for(collection);
        let pos = keys.iter().position(|k| *k == self).unwrap_or(0);
        keys[(pos + 1) % keys.len()]
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Latest => "Latest",
            SortKey::Title => "Title (A-Z)",
            SortKey::Year => "Release year",
            SortKey::Rating => "Rating",
            SortKey::Duration => "Duration",
        }
    }
}

/// Case-insensitive title order (A-Z)
pub fn by_title(a: &Movie, b: &Movie) -> Ordering {
    UniCase::new(a.title.as_str()).cmp(&UniCase::new(b.title.as_str()))
}

/// Newest release first
pub fn by_year(a: &Movie, b: &Movie) -> Ordering {
    b.release_year.cmp(&a.release_year)
}

/// Highest rating first
pub fn by_rating(a: &Movie, b: &Movie) -> Ordering {
    b.rating.total_cmp(&a.rating)
}

/// Longest first
pub fn by_duration(a: &Movie, b: &Movie) -> Ordering {
    b.duration.cmp(&a.duration)
}

/// Sort a copy of `movies` by `key`
pub fn sorted(movies: &[Movie], key: SortKey) -> Vec<Movie> {
    let mut out = movies.to_vec();
    match key {
        SortKey::Latest => {}
        SortKey::Title => out.sort_by(by_title),
        SortKey::Year => out.sort_by(by_year),
        SortKey::Rating => out.sort_by(by_rating),
        SortKey::Duration => out.sort_by(by_duration),
    }
    out
}
