use std::fmt;

/// One game as normalized from the API body.
///
/// `slug` stays optional here so the aggregator can decide what to do with
/// records that have no identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameRecord {
    pub slug: Option<String>,
    pub background_image: Option<String>,
    pub genres: Vec<String>,
    pub rating: Option<f64>,
}

impl GameRecord {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// The slug if it can serve as an identity key (present and not blank).
    pub fn key(&self) -> Option<&str> {
        self.slug
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
    }
}

/// Query parameters for one request against the base endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageQuery {
    /// `None` sends only the size hint.
    pub page: Option<u32>,
    pub page_size: u32,
}

impl PageQuery {
    pub fn bulk(page_size: u32) -> Self {
        Self {
            page: None,
            page_size,
        }
    }

    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size,
        }
    }
}

/// Which fetch strategy produced the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// The single large request was enough.
    #[default]
    Bulk,
    /// The large request came back short, so later pages were fetched too.
    BulkThenPaged,
    /// The large request produced nothing; paged from 1 at the smaller size.
    Paged,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub strategy: Strategy,
    pub attempts: u32,
    pub failed_attempts: u32,
    /// Records received before deduplication.
    pub raw_records: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub records: Vec<GameRecord>,
    pub report: LoadReport,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    CatalogLoaded(Catalog),
    CatalogFailed(FetchError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    /// Body was not JSON.
    MalformedResponse,
    Cancelled,
    Network,
    /// Every strategy finished without a single record.
    NoData,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Cancelled => write!(f, "cancelled"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::NoData => write!(f, "no games returned"),
        }
    }
}
