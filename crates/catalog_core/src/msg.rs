use crate::{Game, GameFilter};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Startup or user-requested (re)load of the catalog.
    ReloadRequested,
    /// Engine finished with a deduplicated result set.
    CatalogLoaded {
        games: Vec<Game>,
        fetched_utc: String,
    },
    /// Every fetch strategy came back empty.
    CatalogFailed { reason: String },
    /// Favorites read from storage at startup.
    RestoreFavorites(Vec<Game>),
    NextSlide,
    PrevSlide,
    /// Pointer entered the slider; pauses auto-advance.
    SliderHoverEnter,
    /// Pointer left the slider; resumes auto-advance.
    SliderHoverLeave,
    /// Fired by the auto-advance timer.
    AutoAdvanceTick,
    NextPage,
    PrevPage,
    FilterSelected(GameFilter),
    ToggleFavorite { slug: String },
}
