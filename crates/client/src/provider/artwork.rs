//! Gallery artwork provider for the film database site.

use std::sync::Arc;

use csfd_core::{ArtworkEntry, MovieArtworkProvider, ProviderInfo, ScrapeError};

use crate::extract::parse_gallery;
use crate::fetch::PageFetcher;

/// Downloads a movie's gallery page and lists its images.
pub struct CsfdArtworkProvider {
    info: ProviderInfo,
    base_url: String,
    fetcher: Arc<dyn PageFetcher>,
}

impl CsfdArtworkProvider {
    pub fn new(info: ProviderInfo, base_url: &str, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { info, base_url: base_url.trim_end_matches('/').to_string(), fetcher }
    }

    fn gallery_url(&self, id: &str) -> String {
        format!("{}/film/{}/galerie", self.base_url, id)
    }
}

#[async_trait::async_trait]
impl MovieArtworkProvider for CsfdArtworkProvider {
    fn provider_info(&self) -> &ProviderInfo {
        &self.info
    }

    async fn artwork(&self, id: &str) -> Result<Vec<ArtworkEntry>, ScrapeError> {
        if id.is_empty() {
            return Err(ScrapeError::Resolution("no movie id for gallery".into()));
        }

        let gallery_url = self.gallery_url(id);
        tracing::debug!("get gallery page {}", gallery_url);

        let body = self.fetcher.fetch_page(&gallery_url).await?;
        if body.trim().is_empty() {
            return Err(ScrapeError::Parse("empty document".into()));
        }

        Ok(parse_gallery(&body, &self.info.id))
    }
}
