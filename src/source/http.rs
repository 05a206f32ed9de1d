// src/source/http.rs
use super::{DataSource, Post, SourceError};
use crate::analysis::TableSnapshot;
use crate::config::consts::{DECK_SELECT_ID, SITE_URL};
use crate::core::net::HttpClient;
use crate::progress::Progress;
use crate::specs::{decks, posts, table};

/// Live blog over HTTPS.
///
/// Deck switching on a post page happens in the browser, so only the deck the
/// server rendered can be read; other decks come back as empty snapshots.
pub struct HttpSource {
    client: HttpClient,
    index_url: String,
}

impl HttpSource {
    pub fn new() -> Result<Self, SourceError> {
        Self::with_index(SITE_URL)
    }

    pub fn with_index(index_url: &str) -> Result<Self, SourceError> {
        Ok(Self { client: HttpClient::new()?, index_url: s!(index_url) })
    }

    fn deck_select(&self, doc: &str, url: &str) -> Result<decks::DeckSelect, SourceError> {
        decks::parse_select(doc)
            .ok_or_else(|| SourceError::MissingElement { id: DECK_SELECT_ID, url: s!(url) })
    }
}

impl DataSource for HttpSource {
    fn name(&self) -> &'static str {
        "svlabo.jp"
    }

    fn list_posts(&self, pages: usize, progress: &mut dyn Progress) -> Result<Vec<Post>, SourceError> {
        progress.begin(pages);
        let mut out: Vec<Post> = Vec::new();
        let mut url = self.index_url.clone();

        for page in 1..=pages {
            progress.log(&format!("Page {page}/{pages}"));
            let doc = match self.client.get(&url) {
                Ok(doc) => doc,
                Err(e) => {
                    progress.finish();
                    return Err(e);
                }
            };
            let (found, next) = posts::parse_index(&doc, &url);
            logd!("Posts: page {page} has {} comparison posts", found.len());
            posts::merge(&mut out, found);
            progress.item_done(page);

            if page == pages {
                break;
            }
            match next {
                Some(n) => url = n,
                None => {
                    logf!("Posts: no next page after page {page}, stopping");
                    break;
                }
            }
        }

        progress.finish();
        logf!("Posts: {} from {}", out.len(), self.name());
        Ok(out)
    }

    fn deck_names(&self, post_url: &str) -> Result<Vec<String>, SourceError> {
        let doc = self.client.get(post_url)?;
        Ok(self.deck_select(&doc, post_url)?.names)
    }

    fn fetch_table(&self, post_url: &str, deck: &str) -> Result<TableSnapshot, SourceError> {
        let doc = self.client.get(post_url)?;
        let select = self.deck_select(&doc, post_url)?;

        match select.current() {
            Some(current) if current == deck => Ok(table::parse(&doc)),
            current => {
                logw!(
                    "Table: {deck:?} is not the rendered deck ({current:?}) of {post_url}; \
                     use a saved snapshot for other decks"
                );
                Ok(TableSnapshot::empty())
            }
        }
    }
}
