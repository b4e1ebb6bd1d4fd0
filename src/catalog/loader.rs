// loader.rs
use crate::catalog::ListingRecord;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// The fixed catalog documents. Category and detail pages read the full
/// catalog; the home page reads the curated featured document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Listings,
    Featured,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Listings => "/listings.json",
            Endpoint::Featured => "/shared/listings.json",
        }
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Network(String),
    Status(u16),
    Io(String),
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "Network error: {msg}"),
            CatalogError::Status(code) => write!(f, "Unexpected status: {code}"),
            CatalogError::Io(msg) => write!(f, "Catalog read error: {msg}"),
            CatalogError::Parse(msg) => write!(f, "Catalog parse error: {msg}"),
        }
    }
}

impl Error for CatalogError {}

/// Seam between page handlers and the transport. Handlers only ever see an
/// ordered batch of records or a `CatalogError`; tests drive them with an
/// in-memory source. Send + Sync because one source is shared across the
/// server's worker pool.
pub trait CatalogSource: Send + Sync {
    fn load(&self, endpoint: Endpoint) -> Result<Vec<ListingRecord>, CatalogError>;
}

/// Reads the catalog documents straight off disk. This is the default
/// source: the documents live under `public/` anyway, and fetching them
/// over HTTP from our own listener would tie up a second pool worker per
/// page view and deadlock once the pool is saturated.
pub struct FileCatalog {
    root: PathBuf,
}

impl FileCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self, endpoint: Endpoint) -> Result<Vec<ListingRecord>, CatalogError> {
        let path = self.root.join(endpoint.path().trim_start_matches('/'));

        let body =
            std::fs::read_to_string(&path).map_err(|e| CatalogError::Io(e.to_string()))?;

        parse_catalog(&body)
    }
}

pub struct HttpCatalog {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let base_url =
            Url::parse(base_url).map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }
}

impl CatalogSource for HttpCatalog {
    fn load(&self, endpoint: Endpoint) -> Result<Vec<ListingRecord>, CatalogError> {
        let url = self
            .base_url
            .join(endpoint.path())
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let text = resp
            .text()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        parse_catalog(&text)
    }
}

/// Parses a catalog document body. Document order is insertion order and is
/// preserved; every page downstream relies on it.
pub fn parse_catalog(body: &str) -> Result<Vec<ListingRecord>, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))
}
