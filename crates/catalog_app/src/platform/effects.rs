use std::sync::mpsc;

use catalog_core::{Effect, Game, Msg};
use catalog_engine::{
    ensure_data_dir, EngineEvent, EngineHandle, FileKeyValueStore, GameRecord, KeyValueStore,
    MemoryKeyValueStore,
};
use chrono::Utc;
use engine_logging::{engine_debug, engine_info, engine_warn};

use super::app::AppEvent;
use super::config::AppConfig;
use super::persistence;
use super::timer::AutoAdvance;

/// Executes core effects against the engine, storage and the slider timer.
pub struct EffectRunner {
    engine: EngineHandle,
    store: Box<dyn KeyValueStore>,
    favorites_key: String,
    timer: AutoAdvance,
    event_tx: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(config: &AppConfig, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let engine = EngineHandle::new(config.fetch_settings(), config.fetch_plan());
        Self::with_parts(engine, open_store(config), config, event_tx)
    }

    pub fn with_parts(
        engine: EngineHandle,
        store: Box<dyn KeyValueStore>,
        config: &AppConfig,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            engine,
            store,
            favorites_key: config.favorites_key.clone(),
            timer: AutoAdvance::new(config.auto_advance_interval()),
            event_tx,
        }
    }

    pub fn load_favorites(&self) -> Vec<Game> {
        persistence::load_favorites(self.store.as_ref(), &self.favorites_key)
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCatalog => {
                    engine_info!("Requesting catalog load");
                    self.engine.load_catalog();
                }
                Effect::PersistFavorites(favorites) => {
                    persistence::save_favorites(
                        self.store.as_ref(),
                        &self.favorites_key,
                        &favorites,
                    );
                }
                Effect::StartAutoAdvance if self.timer.is_running() => {
                    engine_debug!("Auto-advance already running");
                }
                Effect::StartAutoAdvance => self.timer.start(self.event_tx.clone()),
                Effect::StopAutoAdvance => self.timer.stop(),
            }
        }
    }

    /// Engine results that arrived since the last call, as core messages.
    pub fn poll_engine(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }

    pub fn shutdown(&mut self) {
        self.timer.stop();
        self.engine.shutdown();
    }
}

fn open_store(config: &AppConfig) -> Box<dyn KeyValueStore> {
    match ensure_data_dir(&config.data_dir) {
        Ok(()) => Box::new(FileKeyValueStore::new(config.data_dir.clone())),
        Err(err) => {
            engine_warn!(
                "Data dir {:?} unusable ({}); favorites will not survive a restart",
                config.data_dir,
                err
            );
            Box::new(MemoryKeyValueStore::new())
        }
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CatalogLoaded(catalog) => {
            engine_info!(
                "Catalog ready: {} games ({:?}, {} raw records)",
                catalog.records.len(),
                catalog.report.strategy,
                catalog.report.raw_records
            );
            Msg::CatalogLoaded {
                games: catalog.records.into_iter().map(map_record).collect(),
                fetched_utc: Utc::now().to_rfc3339(),
            }
        }
        EngineEvent::CatalogFailed(err) => {
            engine_warn!("Catalog load failed: {}", err);
            Msg::CatalogFailed {
                reason: err.to_string(),
            }
        }
    }
}

/// Records without a usable slug only survive the aggregator when none had
/// one; they get an empty slug and cannot be favorited.
fn map_record(record: GameRecord) -> Game {
    Game {
        slug: record.key().map(str::to_string).unwrap_or_default(),
        background_image: record.background_image,
        genres: record.genres,
        rating: record.rating,
    }
}
