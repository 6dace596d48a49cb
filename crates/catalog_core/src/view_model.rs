use crate::LoadState;

/// Everything the view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub load: LoadState,
    pub slides: Vec<SlideView>,
    pub current_slide: usize,
    pub slider_paused: bool,
    pub cards: Vec<CardView>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    /// `"Page X / Y (Z total)"`.
    pub page_summary: String,
    pub filter_label: String,
    pub favorite_count: usize,
    /// Set only when the result set is empty; replaces the grid.
    pub message: Option<String>,
    pub fetched_utc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    pub slug: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub slug: String,
    pub image: Option<String>,
    pub genres: String,
    pub rating: Option<f64>,
    pub favorite: bool,
}
