use crate::Game;

/// Minimum rating accepted by [`GameFilter::TopRated`].
pub const TOP_RATED_THRESHOLD: f64 = 4.0;

/// Named predicates the grid can be narrowed with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameFilter {
    #[default]
    All,
    /// Rating of at least [`TOP_RATED_THRESHOLD`]. Unrated games never match.
    TopRated,
    /// Case-insensitive substring match against any genre name.
    /// An empty query matches everything.
    Genre(String),
}

impl GameFilter {
    /// Builds a filter from the name the view sends plus its optional text.
    ///
    /// Returns `None` for names it does not know.
    pub fn from_selection(name: &str, text: Option<&str>) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "top-rated" | "top_rated" | "rating" => Some(Self::TopRated),
            "genre" => Some(Self::Genre(text.unwrap_or("").trim().to_string())),
            _ => None,
        }
    }

    pub fn matches(&self, game: &Game) -> bool {
        match self {
            Self::All => true,
            Self::TopRated => game
                .rating
                .is_some_and(|rating| rating >= TOP_RATED_THRESHOLD),
            Self::Genre(query) => {
                let query = query.trim().to_lowercase();
                if query.is_empty() {
                    return true;
                }
                game.genres
                    .iter()
                    .any(|genre| genre.to_lowercase().contains(&query))
            }
        }
    }

    /// Short label for status lines.
    pub fn label(&self) -> String {
        match self {
            Self::All => "all".to_string(),
            Self::TopRated => "top-rated".to_string(),
            Self::Genre(query) if query.is_empty() => "genre".to_string(),
            Self::Genre(query) => format!("genre \"{query}\""),
        }
    }
}
