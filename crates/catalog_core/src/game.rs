/// One game as shown by the view. Identity is the `slug`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Game {
    pub slug: String,
    pub background_image: Option<String>,
    pub genres: Vec<String>,
    /// `None` when the API sent no rating or a non-numeric one.
    pub rating: Option<f64>,
}

impl Game {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Self::default()
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_background_image(mut self, url: impl Into<String>) -> Self {
        self.background_image = Some(url.into());
        self
    }

    /// Genre names joined for display, e.g. `"Action, RPG"`.
    pub fn genres_label(&self) -> String {
        self.genres.join(", ")
    }
}
