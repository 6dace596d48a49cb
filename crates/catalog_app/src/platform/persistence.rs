use catalog_core::Game;
use catalog_engine::KeyValueStore;
use engine_logging::{engine_error, engine_info, engine_warn};
use serde::{Deserialize, Serialize};

/// Favorites are stored in the API's own record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PersistedGame {
    slug: String,
    #[serde(default)]
    background_image: Option<String>,
    #[serde(default)]
    genres: Vec<PersistedGenre>,
    #[serde(default)]
    rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PersistedGenre {
    name: String,
}

/// Absent, unreadable or corrupt storage all mean "no favorites".
pub(crate) fn load_favorites(store: &dyn KeyValueStore, key: &str) -> Vec<Game> {
    let content = match store.get(key) {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(err) => {
            engine_warn!("Failed to read favorites from {:?}: {}", key, err);
            return Vec::new();
        }
    };

    let persisted: Vec<PersistedGame> = match serde_json::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            engine_warn!("Ignoring corrupt favorites under {:?}: {}", key, err);
            return Vec::new();
        }
    };

    let favorites: Vec<Game> = persisted
        .into_iter()
        .map(|game| Game {
            slug: game.slug,
            background_image: game.background_image,
            genres: game.genres.into_iter().map(|genre| genre.name).collect(),
            rating: game.rating,
        })
        .collect();

    engine_info!("Loaded {} favorites", favorites.len());
    favorites
}

/// Rewrites the whole set. Failures are logged, never surfaced.
pub(crate) fn save_favorites(store: &dyn KeyValueStore, key: &str, favorites: &[Game]) {
    let persisted: Vec<PersistedGame> = favorites
        .iter()
        .map(|game| PersistedGame {
            slug: game.slug.clone(),
            background_image: game.background_image.clone(),
            genres: game
                .genres
                .iter()
                .map(|name| PersistedGenre { name: name.clone() })
                .collect(),
            rating: game.rating,
        })
        .collect();

    let content = match serde_json::to_string(&persisted) {
        Ok(text) => text,
        Err(err) => {
            engine_error!("Failed to serialize favorites: {}", err);
            return;
        }
    };

    if let Err(err) = store.set(key, &content) {
        engine_error!("Failed to write favorites under {:?}: {}", key, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_engine::{FileKeyValueStore, MemoryKeyValueStore};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample() -> Vec<Game> {
        vec![
            Game::new("hades")
                .with_rating(4.8)
                .with_genres(["Action", "RPG"])
                .with_background_image("https://img/hades.jpg"),
            Game::new("tetris"),
        ]
    }

    #[test]
    fn favorites_survive_a_restart() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().to_path_buf());
        save_favorites(&store, "favorites", &sample());

        let reopened = FileKeyValueStore::new(temp.path().to_path_buf());
        assert_eq!(load_favorites(&reopened, "favorites"), sample());
    }

    #[test]
    fn stored_shape_matches_api_records() {
        let store = MemoryKeyValueStore::new();
        save_favorites(&store, "favorites", &sample()[..1]);

        let raw: serde_json::Value =
            serde_json::from_str(&store.get("favorites").unwrap().unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!([{
                "slug": "hades",
                "background_image": "https://img/hades.jpg",
                "genres": [{"name": "Action"}, {"name": "RPG"}],
                "rating": 4.8
            }])
        );
    }

    #[test]
    fn missing_or_corrupt_storage_is_empty() {
        let store = MemoryKeyValueStore::new();
        assert!(load_favorites(&store, "favorites").is_empty());

        store.set("favorites", "{not json").unwrap();
        assert!(load_favorites(&store, "favorites").is_empty());

        store.set("favorites", "{\"slug\": \"a\"}").unwrap();
        assert!(load_favorites(&store, "favorites").is_empty());
    }
}
