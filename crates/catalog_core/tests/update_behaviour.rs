use std::sync::Once;

use catalog_core::{
    update, AppState, CatalogLayout, Effect, Game, GameFilter, LoadState, Msg, NO_GAMES_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn catalog(n: usize) -> Vec<Game> {
    (0..n)
        .map(|i| {
            Game::new(format!("game-{i}"))
                .with_rating(if i % 2 == 0 { 4.5 } else { 3.0 })
                .with_genres(if i % 3 == 0 { vec!["RPG"] } else { vec!["Shooter"] })
        })
        .collect()
}

fn loaded(games: Vec<Game>) -> (AppState, Vec<Effect>) {
    let (state, _) = update(AppState::new(), Msg::ReloadRequested);
    update(
        state,
        Msg::CatalogLoaded {
            games,
            fetched_utc: "2024-01-01T00:00:00Z".to_string(),
        },
    )
}

#[test]
fn reload_requests_fetch_once_while_loading() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::ReloadRequested);
    assert_eq!(effects, vec![Effect::FetchCatalog]);
    assert!(state.is_loading());
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::ReloadRequested);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn loaded_catalog_fills_slider_and_first_page() {
    init_logging();
    let (mut state, effects) = loaded(catalog(23));
    let view = state.view();

    assert_eq!(effects, vec![Effect::StartAutoAdvance]);
    assert_eq!(view.load, LoadState::Ready);
    assert_eq!(view.slides.len(), 5);
    assert_eq!(view.current_slide, 0);
    assert_eq!(view.cards.len(), 15);
    assert_eq!(view.page_summary, "Page 1 / 2 (23 total)");
    assert_eq!(view.message, None);
    assert_eq!(view.fetched_utc.as_deref(), Some("2024-01-01T00:00:00Z"));
    assert!(state.consume_dirty());
}

#[test]
fn custom_layout_bounds_slides_and_pages() {
    init_logging();
    let state = AppState::with_layout(CatalogLayout {
        page_size: 4,
        max_slides: 2,
    });
    let (state, _) = update(
        state,
        Msg::CatalogLoaded {
            games: catalog(9),
            fetched_utc: "now".to_string(),
        },
    );
    let view = state.view();
    assert_eq!(view.slides.len(), 2);
    assert_eq!(view.cards.len(), 4);
    assert_eq!(view.total_pages, 3);
}

#[test]
fn empty_catalog_shows_single_message() {
    init_logging();
    let (state, effects) = loaded(Vec::new());
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.load, LoadState::Empty { reason: None });
    assert_eq!(view.message.as_deref(), Some(NO_GAMES_MESSAGE));
    assert!(view.slides.is_empty());
    assert!(view.cards.is_empty());
}

#[test]
fn failure_after_success_clears_everything_and_stops_timer() {
    init_logging();
    let (state, _) = loaded(catalog(3));
    let (state, _) = update(state, Msg::ReloadRequested);
    let (state, effects) = update(
        state,
        Msg::CatalogFailed {
            reason: "network error".to_string(),
        },
    );
    let view = state.view();

    assert_eq!(effects, vec![Effect::StopAutoAdvance]);
    assert_eq!(
        view.load,
        LoadState::Empty {
            reason: Some("network error".to_string())
        }
    );
    assert_eq!(view.message.as_deref(), Some(NO_GAMES_MESSAGE));
    assert!(view.slides.is_empty());
    assert!(view.cards.is_empty());
    assert_eq!(view.page_summary, "Page 1 / 1 (0 total)");
}

#[test]
fn hover_pauses_and_leave_resumes_auto_advance() {
    init_logging();
    let (state, _) = loaded(catalog(5));

    let (state, effects) = update(state, Msg::SliderHoverEnter);
    assert_eq!(effects, vec![Effect::StopAutoAdvance]);
    assert!(state.view().slider_paused);

    let (state, effects) = update(state, Msg::SliderHoverEnter);
    assert!(effects.is_empty());

    let (mut state, _) = update(state, Msg::AutoAdvanceTick);
    assert_eq!(state.view().current_slide, 0);
    state.consume_dirty();

    let (state, effects) = update(state, Msg::SliderHoverLeave);
    assert_eq!(effects, vec![Effect::StartAutoAdvance]);

    let (state, _) = update(state, Msg::AutoAdvanceTick);
    assert_eq!(state.view().current_slide, 1);
}

#[test]
fn slide_buttons_wrap_around() {
    init_logging();
    let (state, _) = loaded(catalog(3));

    let (state, _) = update(state, Msg::PrevSlide);
    assert_eq!(state.view().current_slide, 2);
    let (state, _) = update(state, Msg::NextSlide);
    assert_eq!(state.view().current_slide, 0);
}

#[test]
fn navigation_before_any_catalog_changes_nothing() {
    init_logging();
    for msg in [
        Msg::NextSlide,
        Msg::PrevSlide,
        Msg::AutoAdvanceTick,
        Msg::NextPage,
        Msg::PrevPage,
    ] {
        let state = AppState::new();
        let (mut next, effects) = update(state.clone(), msg);
        assert!(effects.is_empty());
        assert!(!next.consume_dirty());
        assert_eq!(next, state);
    }
}

#[test]
fn page_navigation_clamps_without_dirtying() {
    init_logging();
    let (mut state, _) = loaded(catalog(23));
    state.consume_dirty();

    let (mut state, _) = update(state, Msg::PrevPage);
    assert_eq!(state.view().page, 1);
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::NextPage);
    assert_eq!(state.view().page, 2);
    assert_eq!(state.view().cards.len(), 8);
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::NextPage);
    assert_eq!(state.view().page, 2);
    assert!(!state.consume_dirty());
}

#[test]
fn selecting_filter_resets_to_first_page() {
    init_logging();
    let (state, _) = loaded(catalog(40));
    let (state, _) = update(state, Msg::NextPage);
    let (state, _) = update(state, Msg::NextPage);
    assert_eq!(state.view().page, 3);

    let (state, effects) = update(state, Msg::FilterSelected(GameFilter::TopRated));
    let view = state.view();
    assert!(effects.is_empty());
    assert_eq!(view.page, 1);
    assert_eq!(view.total_count, 20);
    assert_eq!(view.filter_label, "top-rated");

    let (state, _) = update(
        state,
        Msg::FilterSelected(GameFilter::Genre("rpg".to_string())),
    );
    assert_eq!(state.view().total_count, 14);
}

#[test]
fn toggling_favorite_persists_full_snapshot() {
    init_logging();
    let games = catalog(3);
    let (state, _) = loaded(games.clone());

    let (state, effects) = update(
        state,
        Msg::ToggleFavorite {
            slug: "game-1".to_string(),
        },
    );
    assert_eq!(effects, vec![Effect::PersistFavorites(vec![games[1].clone()])]);
    assert!(state.view().cards[1].favorite);
    assert_eq!(state.view().favorite_count, 1);

    let (state, effects) = update(
        state,
        Msg::ToggleFavorite {
            slug: "game-1".to_string(),
        },
    );
    assert_eq!(effects, vec![Effect::PersistFavorites(Vec::new())]);
    assert!(!state.view().cards[1].favorite);
}

#[test]
fn toggling_unknown_slug_is_ignored() {
    init_logging();
    let (mut state, _) = loaded(catalog(3));
    state.consume_dirty();

    let (mut state, effects) = update(
        state,
        Msg::ToggleFavorite {
            slug: "nope".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn restored_favorites_mark_cards_and_can_be_removed_offline() {
    init_logging();
    let saved = Game::new("game-0").with_rating(4.5);
    let (state, effects) = update(AppState::new(), Msg::RestoreFavorites(vec![saved]));
    assert!(effects.is_empty());
    assert!(state.is_favorite("game-0"));

    // Still removable before any catalog arrives.
    let (state, effects) = update(
        state,
        Msg::ToggleFavorite {
            slug: "game-0".to_string(),
        },
    );
    assert_eq!(effects, vec![Effect::PersistFavorites(Vec::new())]);

    let (state, _) = update(state, Msg::RestoreFavorites(vec![Game::new("game-2")]));
    let (state, _) = update(
        state,
        Msg::CatalogLoaded {
            games: catalog(3),
            fetched_utc: "now".to_string(),
        },
    );
    let favorites: Vec<bool> = state.view().cards.iter().map(|card| card.favorite).collect();
    assert_eq!(favorites, vec![false, false, true]);
}

#[test]
fn blank_slug_games_cannot_be_favorited() {
    init_logging();
    let (state, _) = loaded(vec![Game::new(" ").with_rating(4.0), Game::new("")]);

    let (state, effects) = update(
        state,
        Msg::ToggleFavorite {
            slug: " ".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(state.favorites().is_empty());
}
