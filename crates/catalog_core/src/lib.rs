//! Catalog core: pure state machine and view-model helpers.
mod effect;
mod favorites;
mod filter;
mod game;
mod msg;
mod pager;
mod slider;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use favorites::Favorites;
pub use filter::{GameFilter, TOP_RATED_THRESHOLD};
pub use game::Game;
pub use msg::Msg;
pub use pager::{Page, Pager, DEFAULT_PAGE_SIZE};
pub use slider::{Slider, DEFAULT_MAX_SLIDES};
pub use state::{AppState, CatalogLayout, LoadState, NO_GAMES_MESSAGE};
pub use update::update;
pub use view_model::{AppViewModel, CardView, SlideView};
