//! Content loader: fragment cache, retrieval, fallback and page population.
//!
//! ### Fragment contract
//! `fetch_fragment(path, element_id)` always yields markup:
//! - cache hit: the cached string, no network access;
//! - otherwise fetch + extract, cache on success;
//! - any failure: the fallback registered for `element_id` as a content
//!   label, or the generic "content unavailable" notice.
//!
//! ### Page population
//! Static header/footer first, then every document-backed placeholder present
//! on the page gets a loading indicator, all of them are fetched
//! concurrently, and the results are placed. Missing placeholders are skipped
//! without a fetch. Finally the navigation entry for the current page is
//! marked active.

use std::sync::Arc;

use brochure_core::site::LOADING_MARKUP;
use brochure_core::{AppConfig, ContentMapping, ContentSource, ContentType, Error, FragmentCache, FragmentKey};
use futures_util::future::join_all;

use crate::extract::extract_fragment;
use crate::fetch::{DocumentSource, FetchClient, FetchConfig};
use crate::page::Page;

/// Where a fragment's markup came from.
#[derive(Debug)]
pub enum Fragment {
    /// Built-in markup.
    Static(&'static str),
    /// Served from the fragment cache.
    Cached(String),
    /// Fetched and extracted just now, and cached.
    Fetched(String),
    /// Retrieval failed; fallback markup stands in.
    Fallback { markup: &'static str, error: Error },
}

impl Fragment {
    pub fn markup(&self) -> &str {
        match self {
            Fragment::Static(markup) => markup,
            Fragment::Cached(markup) | Fragment::Fetched(markup) => markup,
            Fragment::Fallback { markup, .. } => markup,
        }
    }

    pub fn into_markup(self) -> String {
        match self {
            Fragment::Cached(markup) | Fragment::Fetched(markup) => markup,
            Fragment::Static(markup) | Fragment::Fallback { markup, .. } => markup.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Fragment::Fallback { .. })
    }
}

/// What `populate_page` did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PopulateReport {
    /// Content placed into its placeholder (including fallbacks).
    pub loaded: Vec<ContentType>,
    /// Content whose placeholder is not on the page.
    pub skipped: Vec<ContentType>,
    /// Content that was placed as fallback markup.
    pub fallbacks: Vec<ContentType>,
    /// Content whose placeholder could not be written.
    pub failed: Vec<ContentType>,
    /// Page name the navigation was highlighted for.
    pub active_page: Option<String>,
}

/// Loads site fragments into pages.
///
/// Construct one per page bootstrap and pass it to whatever needs it. The
/// cache handle from [`ContentLoader::cache`] can be cloned and kept for
/// manual invalidation.
pub struct ContentLoader {
    source: Arc<dyn DocumentSource>,
    cache: FragmentCache,
}

impl ContentLoader {
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self::with_cache(source, FragmentCache::new())
    }

    pub fn with_cache(source: Arc<dyn DocumentSource>, cache: FragmentCache) -> Self {
        Self { source, cache }
    }

    /// Loader backed by an HTTP fetch client built from application config.
    pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
        let client = FetchClient::new(FetchConfig::from(config))?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn cache(&self) -> &FragmentCache {
        &self.cache
    }

    /// Drop every cached fragment. Returns how many were removed.
    pub async fn clear_cache(&self) -> usize {
        self.cache.clear().await
    }

    /// Markup for `element_id` inside the document at `path`. Never fails.
    pub async fn fetch_fragment(&self, path: &str, element_id: &str) -> String {
        self.fragment(path, element_id).await.into_markup()
    }

    /// Like [`fetch_fragment`](Self::fetch_fragment), but reports where the
    /// markup came from.
    pub async fn fragment(&self, path: &str, element_id: &str) -> Fragment {
        let key = FragmentKey::new(path, element_id);

        if let Some(markup) = self.cache.get(&key).await {
            tracing::debug!(key = %key, "fragment cache hit");
            return Fragment::Cached(markup);
        }

        match self.retrieve(path, element_id).await {
            Ok(markup) => {
                tracing::debug!(key = %key, bytes = markup.len(), "fragment loaded");
                self.cache.insert(key, markup.clone()).await;
                Fragment::Fetched(markup)
            }
            Err(error) => {
                tracing::warn!(
                    path,
                    element_id,
                    code = error.code(),
                    error = %error,
                    "fragment unavailable, using fallback"
                );
                Fragment::Fallback { markup: brochure_core::fallback_for(element_id), error }
            }
        }
    }

    /// Fetch and extract without consulting or filling the cache.
    pub async fn retrieve(&self, path: &str, element_id: &str) -> Result<String, Error> {
        let html = self.source.fetch_document(path).await?;
        extract_fragment(&html, element_id, path)
    }

    /// Markup for one content type.
    pub async fn content(&self, content: ContentType) -> Fragment {
        match content.source() {
            ContentSource::Static(markup) => Fragment::Static(markup),
            ContentSource::Document { path, element_id } => self.fragment(path, element_id).await,
        }
    }

    /// Load one content type into one placeholder.
    ///
    /// Returns `Ok(None)` without fetching when the placeholder is absent.
    /// Document-backed content shows the loading indicator until it arrives.
    pub async fn load_content(
        &self, page: &mut Page, placeholder: &str, content: ContentType,
    ) -> Result<Option<Fragment>, Error> {
        if !page.has_element(placeholder) {
            return Ok(None);
        }
        if !content.is_static() {
            page.set_inner_html(placeholder, LOADING_MARKUP)?;
        }
        let fragment = self.content(content).await;
        page.set_inner_html(placeholder, fragment.markup())?;
        Ok(Some(fragment))
    }

    /// Fill every mapped placeholder on the page and highlight the current
    /// navigation entry. Never fails; problems are logged and reported.
    pub async fn populate_page(&self, page: &mut Page, mappings: &[ContentMapping]) -> PopulateReport {
        tracing::info!(page = page.path(), "populating page");
        let mut report = PopulateReport::default();

        let (statics, documents): (Vec<&ContentMapping>, Vec<&ContentMapping>) =
            mappings.iter().partition(|mapping| mapping.content.is_static());

        for mapping in statics {
            match self.load_content(page, mapping.placeholder, mapping.content).await {
                Ok(Some(_)) => report.loaded.push(mapping.content),
                Ok(None) => report.skipped.push(mapping.content),
                Err(error) => record_failure(&mut report, mapping, &error),
            }
        }

        let mut pending = Vec::new();
        for mapping in documents {
            if !page.has_element(mapping.placeholder) {
                tracing::debug!(placeholder = mapping.placeholder, "placeholder not on page, skipping");
                report.skipped.push(mapping.content);
                continue;
            }
            if let Err(error) = page.set_inner_html(mapping.placeholder, LOADING_MARKUP) {
                tracing::warn!(
                    placeholder = mapping.placeholder,
                    error = %error,
                    "could not show loading indicator"
                );
            }
            pending.push(mapping);
        }

        let fragments = join_all(pending.iter().map(|mapping| self.content(mapping.content))).await;

        for (mapping, fragment) in pending.into_iter().zip(fragments) {
            match page.set_inner_html(mapping.placeholder, fragment.markup()) {
                Ok(()) => {
                    if fragment.is_fallback() {
                        report.fallbacks.push(mapping.content);
                    }
                    report.loaded.push(mapping.content);
                }
                Err(error) => record_failure(&mut report, mapping, &error),
            }
        }

        match page.set_active_menu() {
            Ok(name) => report.active_page = Some(name),
            Err(error) => tracing::warn!(error = %error, "could not highlight navigation"),
        }

        tracing::info!(
            loaded = report.loaded.len(),
            skipped = report.skipped.len(),
            fallbacks = report.fallbacks.len(),
            failed = report.failed.len(),
            "page populated"
        );

        report
    }
}

fn record_failure(report: &mut PopulateReport, mapping: &ContentMapping, error: &Error) {
    tracing::warn!(
        placeholder = mapping.placeholder,
        content = %mapping.content,
        error = %error,
        "could not place content"
    );
    report.failed.push(mapping.content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use brochure_core::DEFAULT_MAPPINGS;
    use brochure_core::site::{BLOG_FALLBACK, CONTENT_UNAVAILABLE, SERVICES_FALLBACK};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::extract::nav_links;

    /// In-memory documents with a request counter.
    #[derive(Default)]
    struct StubSource {
        documents: HashMap<String, String>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn with(documents: &[(&str, &str)]) -> Arc<Self> {
            Arc::new(Self {
                documents: documents.iter().map(|(p, d)| (p.to_string(), d.to_string())).collect(),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DocumentSource for StubSource {
        async fn fetch_document(&self, path: &str) -> Result<String, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.documents
                .get(path)
                .cloned()
                .ok_or_else(|| Error::HttpError(format!("{path} returned status 404")))
        }
    }

    const FULL_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
    <div id="header-placeholder"></div>
    <section id="services-content"></section>
    <section id="about-content"></section>
    <section id="works-content"></section>
    <section id="blog-content"></section>
    <div id="footer-placeholder"></div>
</body>
</html>"#;

    fn site_documents() -> Arc<StubSource> {
        StubSource::with(&[
            ("./services.html", r#"<html><body><div id="services-summary"><h3>設計監理</h3></div></body></html>"#),
            ("./about.html", r#"<html><body><div id="about-summary"><p>1998年創業</p></div></body></html>"#),
            ("./works.html", r#"<html><body><div id="works-summary"><ul><li>平野の家</li></ul></div></body></html>"#),
        ])
    }

    #[tokio::test]
    async fn test_fetch_fragment_extracts_and_caches() {
        let source = StubSource::with(&[("services.html", r#"<div id="services-summary">X</div>"#)]);
        let loader = ContentLoader::new(source.clone());

        assert_eq!(loader.fetch_fragment("services.html", "services-summary").await, "X");
        assert_eq!(loader.cache().keys().await, vec!["services.html_services-summary".to_string()]);

        assert_eq!(loader.fetch_fragment("services.html", "services-summary").await, "X");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_fragment_reports_origin() {
        let source = StubSource::with(&[("services.html", r#"<div id="services-summary">X</div>"#)]);
        let loader = ContentLoader::new(source);

        assert!(matches!(loader.fragment("services.html", "services-summary").await, Fragment::Fetched(_)));
        assert!(matches!(loader.fragment("services.html", "services-summary").await, Fragment::Cached(_)));
    }

    #[tokio::test]
    async fn test_unreachable_path_uses_registered_fallback() {
        let source = StubSource::with(&[]);
        let loader = ContentLoader::new(source);

        let fragment = loader.fragment("missing.html", "services-summary").await;
        assert!(matches!(&fragment, Fragment::Fallback { error: Error::HttpError(_), .. }));
        assert_eq!(fragment.into_markup(), SERVICES_FALLBACK);
        assert!(loader.cache().is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_label_uses_generic_fallback() {
        let loader = ContentLoader::new(StubSource::with(&[]));
        assert_eq!(loader.fetch_fragment("gallery.html", "gallery-summary").await, CONTENT_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_missing_element_is_not_cached() {
        let source = StubSource::with(&[("./blog.html", "<html><body><p>準備中</p></body></html>")]);
        let loader = ContentLoader::new(source.clone());

        assert_eq!(loader.fetch_fragment("./blog.html", "blog-summary").await, BLOG_FALLBACK);
        assert_eq!(loader.fetch_fragment("./blog.html", "blog-summary").await, BLOG_FALLBACK);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_refetch() {
        let source = StubSource::with(&[("services.html", r#"<div id="services-summary">X</div>"#)]);
        let loader = ContentLoader::new(source.clone());
        let handle = loader.cache().clone();

        loader.fetch_fragment("services.html", "services-summary").await;
        assert_eq!(handle.clear().await, 1);
        loader.fetch_fragment("services.html", "services-summary").await;

        assert_eq!(source.calls(), 2);
        assert_eq!(loader.clear_cache().await, 1);
    }

    #[tokio::test]
    async fn test_static_content_never_fetches() {
        let source = StubSource::with(&[]);
        let loader = ContentLoader::new(source.clone());

        let header = loader.content(ContentType::Header).await;
        assert!(matches!(header, Fragment::Static(_)));
        assert!(header.markup().contains("nav-links"));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_load_content_missing_placeholder() {
        let source = StubSource::with(&[]);
        let loader = ContentLoader::new(source.clone());
        let mut page = Page::new("/index.html", "<html><body></body></html>");

        let result = loader.load_content(&mut page, "services-content", ContentType::ServicesSummary).await;
        assert!(matches!(result, Ok(None)));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_populate_page_fills_every_placeholder() {
        let source = site_documents();
        let loader = ContentLoader::new(source.clone());
        let mut page = Page::new("/services.html", FULL_PAGE);

        let report = loader.populate_page(&mut page, DEFAULT_MAPPINGS).await;

        assert_eq!(report.loaded.len(), 6);
        assert!(report.skipped.is_empty());
        assert!(report.failed.is_empty());
        assert_eq!(report.fallbacks, vec![ContentType::BlogSummary]);
        assert_eq!(report.active_page.as_deref(), Some("services"));
        assert_eq!(source.calls(), 4);

        assert_eq!(page.inner_html("services-content").as_deref(), Some("<h3>設計監理</h3>"));
        assert_eq!(page.inner_html("about-content").as_deref(), Some("<p>1998年創業</p>"));
        assert!(page.inner_html("blog-content").unwrap().contains("ブログコンテンツ作成中"));
        assert!(page.inner_html("footer-placeholder").unwrap().contains("footer-content"));
        assert!(!page.html().contains("コンテンツを読み込み中"));

        let active: Vec<_> = nav_links(page.html()).into_iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].page.as_deref(), Some("services"));
    }

    #[tokio::test]
    async fn test_populate_page_ignores_template_placeholders() {
        let source = site_documents();
        let loader = ContentLoader::new(source.clone());
        let html = r#"<html><body><template><section id="works-content"></section></template></body></html>"#;
        let mut page = Page::new("/works.html", html);

        let report = loader.populate_page(&mut page, DEFAULT_MAPPINGS).await;

        assert!(report.skipped.contains(&ContentType::WorksSummary));
        assert!(report.failed.is_empty());
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_populate_page_skips_absent_placeholders() {
        let source = site_documents();
        let loader = ContentLoader::new(source.clone());
        let html = r#"<html><body>
            <div id="header-placeholder"></div>
            <section id="works-content"></section>
        </body></html>"#;
        let mut page = Page::new("/", html);

        let report = loader.populate_page(&mut page, DEFAULT_MAPPINGS).await;

        assert_eq!(report.loaded, vec![ContentType::Header, ContentType::WorksSummary]);
        assert_eq!(
            report.skipped,
            vec![ContentType::Footer, ContentType::ServicesSummary, ContentType::AboutSummary, ContentType::BlogSummary]
        );
        assert_eq!(source.calls(), 1);
        assert_eq!(report.active_page.as_deref(), Some("index"));
    }

    #[tokio::test]
    async fn test_populate_page_reuses_cache_across_pages() {
        let source = site_documents();
        let loader = ContentLoader::new(source.clone());

        let mut first = Page::new("/index.html", FULL_PAGE);
        loader.populate_page(&mut first, DEFAULT_MAPPINGS).await;
        let mut second = Page::new("/about.html", FULL_PAGE);
        loader.populate_page(&mut second, DEFAULT_MAPPINGS).await;

        // Blog has no summary element, so only it is fetched again.
        assert_eq!(source.calls(), 5);
        assert_eq!(first.inner_html("works-content"), second.inner_html("works-content"));
    }

    #[tokio::test]
    async fn test_populate_page_empty_document() {
        let loader = ContentLoader::new(StubSource::with(&[]));
        let mut page = Page::new("", "");

        let report = loader.populate_page(&mut page, DEFAULT_MAPPINGS).await;
        assert!(report.loaded.is_empty());
        assert_eq!(report.skipped.len(), DEFAULT_MAPPINGS.len());
    }

    #[tokio::test]
    async fn test_http_loader_caches_without_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"<div id="services-summary">X</div>"#))
            .expect(1)
            .mount(&server)
            .await;

        let config = AppConfig { base_url: format!("{}/", server.uri()), ..Default::default() };
        let loader = ContentLoader::from_config(&config).unwrap();

        assert_eq!(loader.fetch_fragment("services.html", "services-summary").await, "X");
        assert_eq!(loader.fetch_fragment("services.html", "services-summary").await, "X");
    }

    #[tokio::test]
    async fn test_http_loader_timeout_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/about.html"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"<div id="about-summary">late</div>"#)
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config = AppConfig { base_url: format!("{}/", server.uri()), timeout_ms: 200, ..Default::default() };
        let loader = ContentLoader::from_config(&config).unwrap();

        let fragment = loader.fragment("./about.html", "about-summary").await;
        assert!(matches!(fragment, Fragment::Fallback { error: Error::FetchTimeout(_), .. }));
        assert!(loader.cache().is_empty().await);
    }
}
