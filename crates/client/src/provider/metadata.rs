//! Metadata and search provider for the film database site.

use std::sync::Arc;

use csfd_core::{MovieMetadata, MovieMetadataProvider, ProviderInfo, ScrapeError, ScrapeRequest, SearchCandidate};
use scraper::Html;

use crate::extract::normalize::scrub_query;
use crate::extract::{extract_movie, parse_search_results};
use crate::fetch::PageFetcher;
use crate::score::{RelevanceScorer, TitleSimilarityScorer};

/// Scrapes one movie detail page per request and parses search listings.
///
/// Holds no per-call state: every scrape is one fetch, one parse, one
/// extractor pass over the document.
pub struct CsfdMetadataProvider {
    info: ProviderInfo,
    base_url: String,
    fetcher: Arc<dyn PageFetcher>,
    scorer: Box<dyn RelevanceScorer>,
}

impl CsfdMetadataProvider {
    pub fn new(info: ProviderInfo, base_url: &str, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::with_scorer(info, base_url, fetcher, Box::new(TitleSimilarityScorer))
    }

    /// Construct with a custom relevance scorer.
    pub fn with_scorer(
        info: ProviderInfo, base_url: &str, fetcher: Arc<dyn PageFetcher>, scorer: Box<dyn RelevanceScorer>,
    ) -> Self {
        Self { info, base_url: base_url.trim_end_matches('/').to_string(), fetcher, scorer }
    }

    fn detail_url(&self, id: &str) -> String {
        format!("{}/film/{}", self.base_url, id)
    }

    /// Derive the detail-page URL from the request.
    ///
    /// Precedence: explicit site id, then a prior search result's URL, then
    /// a best-effort search by IMDb id. Anything else is a resolution
    /// failure.
    async fn resolve_detail_url(&self, request: &ScrapeRequest) -> Result<String, ScrapeError> {
        if let Some(id) = request.id.as_deref()
            && !id.is_empty()
        {
            return Ok(self.detail_url(id));
        }

        if let Some(prior) = &request.prior_result
            && !prior.url.is_empty()
        {
            return Ok(prior.url.clone());
        }

        if let Some(imdb_id) = request.imdb_id.as_deref()
            && !imdb_id.is_empty()
        {
            let results = self.search(imdb_id, None).await;
            match results.first() {
                Some(best) => return Ok(best.url.clone()),
                None => tracing::warn!("IMDb id {} matched nothing on the site", imdb_id),
            }
        }

        Err(ScrapeError::Resolution("we did not get any useful movie url".into()))
    }

    async fn try_search(&self, query: &str, year_hint: Option<&str>) -> Result<Vec<SearchCandidate>, ScrapeError> {
        let scrubbed = scrub_query(query);
        if scrubbed.is_empty() {
            return Ok(Vec::new());
        }

        let mut search_url = url::Url::parse(&format!("{}/hledat/", self.base_url))
            .map_err(|e| ScrapeError::InvalidUrl(e.to_string()))?;
        search_url.query_pairs_mut().append_pair("q", &scrubbed);

        tracing::debug!("search for everything: {}", scrubbed);

        let body = self.fetcher.fetch_page(search_url.as_str()).await?;
        if body.trim().is_empty() {
            return Err(ScrapeError::Parse("empty document".into()));
        }

        Ok(parse_search_results(&body, &scrubbed, year_hint, &self.base_url, &self.info.id, self.scorer.as_ref()))
    }
}

#[async_trait::async_trait]
impl MovieMetadataProvider for CsfdMetadataProvider {
    fn provider_info(&self) -> &ProviderInfo {
        &self.info
    }

    async fn get_metadata(&self, request: &ScrapeRequest) -> Result<MovieMetadata, ScrapeError> {
        let detail_url = self.resolve_detail_url(request).await?;
        tracing::debug!("get details page {}", detail_url);

        let body = self.fetcher.fetch_page(&detail_url).await?;
        let doc = parse_document(&body)?;

        let mut md = MovieMetadata::new(&self.info.id);
        extract_movie(&doc, &mut md);

        Ok(md)
    }

    async fn search(&self, query: &str, year_hint: Option<&str>) -> Vec<SearchCandidate> {
        match self.try_search(query, year_hint).await {
            Ok(results) => results,
            Err(err) => {
                tracing::error!("failed to search for {:?}: {}", query, err);
                Vec::new()
            }
        }
    }
}

/// Parse a fetched body into a queryable document.
///
/// The parser itself is lenient; only a body with no content at all is a
/// parse failure.
pub(crate) fn parse_document(body: &str) -> Result<Html, ScrapeError> {
    if body.trim().is_empty() {
        return Err(ScrapeError::Parse("empty document".into()));
    }
    Ok(Html::parse_document(body))
}
