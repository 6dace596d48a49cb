use crate::view_model::{AppViewModel, CardView, SlideView};
use crate::{Favorites, Game, GameFilter, Pager, Slider, DEFAULT_MAX_SLIDES, DEFAULT_PAGE_SIZE};

/// Text shown in place of the grid when nothing could be loaded.
pub const NO_GAMES_MESSAGE: &str = "No games found.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    /// All fetch strategies produced nothing. `reason` is the last failure,
    /// if there was one.
    Empty { reason: Option<String> },
}

/// Fixed sizes for the grid and the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLayout {
    pub page_size: usize,
    pub max_slides: usize,
}

impl Default for CatalogLayout {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_slides: DEFAULT_MAX_SLIDES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    load: LoadState,
    pager: Pager,
    slider: Slider,
    favorites: Favorites,
    fetched_utc: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: CatalogLayout) -> Self {
        Self {
            pager: Pager::new(layout.page_size),
            slider: Slider::new(layout.max_slides),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let showing_results = self.load == LoadState::Ready;
        let page = self.pager.current_page();

        let slides = if showing_results {
            self.slider
                .slides()
                .iter()
                .map(|game| SlideView {
                    slug: game.slug.clone(),
                    image: game.background_image.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        let cards = if showing_results {
            page.games
                .iter()
                .map(|game| CardView {
                    slug: game.slug.clone(),
                    image: game.background_image.clone(),
                    genres: game.genres_label(),
                    rating: game.rating,
                    favorite: self.favorites.is_favorite(&game.slug),
                })
                .collect()
        } else {
            Vec::new()
        };

        let message = match self.load {
            LoadState::Empty { .. } => Some(NO_GAMES_MESSAGE.to_string()),
            _ => None,
        };

        AppViewModel {
            load: self.load.clone(),
            slides,
            current_slide: self.slider.index(),
            slider_paused: self.slider.is_paused(),
            cards,
            page: page.number,
            total_pages: page.total_pages,
            total_count: page.total_count,
            page_summary: self.pager.summary(),
            filter_label: self.pager.filter().label(),
            favorite_count: self.favorites.len(),
            message,
            fetched_utc: self.fetched_utc.clone(),
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// True while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_favorite(&self, slug: &str) -> bool {
        self.favorites.is_favorite(slug)
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns `false` if a load is already in flight.
    pub(crate) fn begin_loading(&mut self) -> bool {
        if self.load == LoadState::Loading {
            return false;
        }
        self.load = LoadState::Loading;
        self.mark_dirty();
        true
    }

    /// Installs a fresh result set. Returns whether the slider has anything
    /// to show.
    pub(crate) fn apply_catalog(&mut self, games: Vec<Game>, fetched_utc: String) -> bool {
        if games.is_empty() {
            self.apply_failure(None);
            return false;
        }
        self.slider.load(&games);
        self.pager.set_games(games);
        self.fetched_utc = Some(fetched_utc);
        self.load = LoadState::Ready;
        self.mark_dirty();
        !self.slider.is_empty()
    }

    pub(crate) fn apply_failure(&mut self, reason: Option<String>) {
        self.slider.load(&[]);
        self.pager.set_games(Vec::new());
        self.load = LoadState::Empty { reason };
        self.mark_dirty();
    }

    pub(crate) fn restore_favorites(&mut self, games: Vec<Game>) {
        self.favorites = Favorites::from_games(games);
        self.mark_dirty();
    }

    /// Toggles by slug, looking the record up in the result set first and in
    /// the favorites second. Returns the new snapshot when something changed.
    pub(crate) fn toggle_favorite(&mut self, slug: &str) -> Option<Vec<Game>> {
        let game = self
            .pager
            .find(slug)
            .or_else(|| self.favorites.get(slug))
            .cloned()?;
        if game.slug.trim().is_empty() {
            return None;
        }
        self.favorites.toggle(&game);
        self.mark_dirty();
        Some(self.favorites.snapshot())
    }

    pub(crate) fn set_filter(&mut self, filter: GameFilter) {
        self.pager.set_filter(filter);
        self.mark_dirty();
    }

    pub(crate) fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    pub(crate) fn slider_mut(&mut self) -> &mut Slider {
        &mut self.slider
    }

    pub(crate) fn slider(&self) -> &Slider {
        &self.slider
    }
}
