use std::collections::BTreeMap;

use crate::Game;

/// Games the user marked as liked, keyed by slug.
///
/// A slug is present exactly when its last toggle turned it on. The set is
/// restored once at startup and every toggle is followed by a full write-back
/// (see `Effect::PersistFavorites`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Favorites {
    by_slug: BTreeMap<String, Game>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from persisted records. Later duplicates and records
    /// with an empty slug are ignored.
    pub fn from_games(games: Vec<Game>) -> Self {
        let mut by_slug = BTreeMap::new();
        for game in games {
            if game.slug.trim().is_empty() {
                continue;
            }
            by_slug.entry(game.slug.clone()).or_insert(game);
        }
        Self { by_slug }
    }

    pub fn is_favorite(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    /// Removes `game` if present, otherwise adds it. Returns whether the game
    /// is a favorite afterwards. Games with an empty slug cannot be toggled.
    pub fn toggle(&mut self, game: &Game) -> bool {
        if game.slug.trim().is_empty() {
            return false;
        }
        if self.by_slug.remove(&game.slug).is_some() {
            false
        } else {
            self.by_slug.insert(game.slug.clone(), game.clone());
            true
        }
    }

    pub fn get(&self, slug: &str) -> Option<&Game> {
        self.by_slug.get(slug)
    }

    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.by_slug.keys().map(String::as_str)
    }

    /// Every favorite, ordered by slug. This is what gets persisted.
    pub fn snapshot(&self) -> Vec<Game> {
        self.by_slug.values().cloned().collect()
    }
}
