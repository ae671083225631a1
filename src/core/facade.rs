use crate::config::SheetsConfig;
use crate::core::cache::RangeCache;
use crate::core::parse;
use crate::domain::model::{
    AttributeMap, Category, DataOrigin, PortfolioData, Project, SkillCategory,
};
use crate::domain::ports::RangeSource;
use std::collections::HashMap;
use std::sync::Mutex;

/// Typed accessors over raw range rows, with optional TTL caching.
///
/// Accessors never fail: the source already absorbs remote failures into
/// fallback rows, and the parsers absorb malformed rows. Each serve also
/// records where the payload came from, queryable via [`Portfolio::status`].
pub struct Portfolio<S: RangeSource> {
    source: S,
    cache: Option<RangeCache>,
    status: Mutex<HashMap<Category, DataOrigin>>,
}

impl<S: RangeSource> Portfolio<S> {
    pub fn new(source: S, config: &SheetsConfig) -> Self {
        let cache = config
            .cache_enabled
            .then(|| RangeCache::new(config.cache_ttl()));
        Self {
            source,
            cache,
            status: Mutex::new(HashMap::new()),
        }
    }

    pub async fn about(&self) -> AttributeMap {
        parse::parse_key_value(&self.rows_for(Category::About).await)
    }

    pub async fn skills(&self) -> Vec<SkillCategory> {
        parse::parse_skills(&self.rows_for(Category::Skills).await)
    }

    pub async fn projects(&self) -> Vec<Project> {
        parse::parse_projects(&self.rows_for(Category::Projects).await)
    }

    pub async fn contact(&self) -> AttributeMap {
        parse::parse_key_value(&self.rows_for(Category::Contact).await)
    }

    /// Fetch all four categories concurrently.
    pub async fn fetch_all(&self) -> PortfolioData {
        let (about, skills, projects, contact) = tokio::join!(
            self.about(),
            self.skills(),
            self.projects(),
            self.contact()
        );
        PortfolioData {
            about,
            skills,
            projects,
            contact,
        }
    }

    /// Origin of the most recent serve per category.
    pub fn status(&self) -> HashMap<Category, DataOrigin> {
        self.status.lock().unwrap().clone()
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    /// Raw rows for a category: fresh cache entry if present, otherwise a
    /// source read. Only remote rows are cached; fallback rows are not, so
    /// a recovered remote comes back on the next request.
    async fn rows_for(&self, category: Category) -> Vec<Vec<String>> {
        let range = category.range();

        if let Some(cache) = &self.cache {
            if let Some(rows) = cache.get_fresh(range) {
                tracing::debug!("Using cached rows for {}", range);
                self.record(category, DataOrigin::Cache);
                return rows;
            }
        }

        let outcome = self.source.read_range(range).await;
        if outcome.origin == DataOrigin::Remote {
            if let Some(cache) = &self.cache {
                cache.put(range, outcome.rows.clone());
            }
        }
        self.record(category, outcome.origin);
        outcome.rows
    }

    fn record(&self, category: Category, origin: DataOrigin) {
        self.status.lock().unwrap().insert(category, origin);
    }

    #[cfg(test)]
    pub(crate) fn backdate_cache(&self, category: Category, age: std::time::Duration) {
        if let Some(cache) = &self.cache {
            cache.backdate(category.range(), age);
        }
    }
}
