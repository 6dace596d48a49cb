use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ReloadRequested => {
            if state.begin_loading() {
                vec![Effect::FetchCatalog]
            } else {
                Vec::new()
            }
        }
        Msg::CatalogLoaded { games, fetched_utc } => {
            let had_slides = !state.slider().is_empty();
            let has_slides = state.apply_catalog(games, fetched_utc);
            slider_timer_effects(&state, had_slides, has_slides)
        }
        Msg::CatalogFailed { reason } => {
            let had_slides = !state.slider().is_empty();
            state.apply_failure(Some(reason));
            slider_timer_effects(&state, had_slides, false)
        }
        Msg::RestoreFavorites(games) => {
            state.restore_favorites(games);
            Vec::new()
        }
        Msg::NextSlide => {
            if state.slider_mut().next() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PrevSlide => {
            if state.slider_mut().prev() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::AutoAdvanceTick => {
            if state.slider_mut().auto_advance() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SliderHoverEnter => {
            if state.slider_mut().pause() {
                state.mark_dirty();
                vec![Effect::StopAutoAdvance]
            } else {
                Vec::new()
            }
        }
        Msg::SliderHoverLeave => {
            if state.slider_mut().resume() {
                state.mark_dirty();
                if state.slider().is_empty() {
                    Vec::new()
                } else {
                    vec![Effect::StartAutoAdvance]
                }
            } else {
                Vec::new()
            }
        }
        Msg::NextPage => {
            if state.pager_mut().next_page() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PrevPage => {
            if state.pager_mut().prev_page() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FilterSelected(filter) => {
            state.set_filter(filter);
            Vec::new()
        }
        Msg::ToggleFavorite { slug } => match state.toggle_favorite(&slug) {
            Some(snapshot) => vec![Effect::PersistFavorites(snapshot)],
            None => Vec::new(),
        },
    };

    (state, effects)
}

/// Timer effects after the slide list was replaced.
fn slider_timer_effects(state: &AppState, had_slides: bool, has_slides: bool) -> Vec<Effect> {
    let running = !state.slider().is_paused();
    match (had_slides, has_slides) {
        (false, true) if running => vec![Effect::StartAutoAdvance],
        (true, false) if running => vec![Effect::StopAutoAdvance],
        _ => Vec::new(),
    }
}
