//! Article list state with the cache-update reducers.
//!
//! DESIGN
//! ======
//! The server is the source of truth; `items` is a cache refreshed on each
//! successful call. Reducers mirror the endpoint semantics exactly: full
//! replace for fetch, append for create, replace-by-identifier for update,
//! filter-out for delete.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use crate::net::types::Article;

/// Article cache plus the "currently edited article" reference.
#[derive(Clone, Debug, Default)]
pub struct ArticlesState {
    /// Ordered article cache, mirroring server order.
    pub items: Vec<Article>,
    /// Identifier of the article loaded into the form; `None` means the
    /// form is in create mode.
    pub editing: Option<i64>,
}

impl ArticlesState {
    /// Replace the whole cache from a successful list fetch.
    pub fn replace_all(&mut self, items: Vec<Article>) {
        self.items = items;
    }

    /// Append a freshly created article.
    pub fn append(&mut self, article: Article) {
        self.items.push(article);
    }

    /// Replace the entry whose identifier matches the updated article.
    /// No-op if the identifier is not in the cache.
    pub fn apply_update(&mut self, article: Article) {
        if let Some(slot) = self
            .items
            .iter_mut()
            .find(|a| a.article_id == article.article_id)
        {
            *slot = article;
        }
    }

    /// Drop the entry with the given identifier.
    pub fn remove(&mut self, article_id: i64) {
        self.items.retain(|a| a.article_id != article_id);
    }

    /// The article currently loaded into the form, if any.
    pub fn editing_article(&self) -> Option<&Article> {
        let id = self.editing?;
        self.items.iter().find(|a| a.article_id == id)
    }
}
