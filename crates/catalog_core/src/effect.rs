use crate::Game;

/// Side effects requested by [`crate::update`]. The driver executes them and
/// reports results back as messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run the fetch strategies against the configured endpoint.
    FetchCatalog,
    /// Rewrite the persisted favorites with this full snapshot.
    PersistFavorites(Vec<Game>),
    StartAutoAdvance,
    StopAutoAdvance,
}
