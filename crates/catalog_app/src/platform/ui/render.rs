use catalog_core::{AppViewModel, CardView, LoadState};

const FAVORITE_MARK: &str = "♥";
const PLAIN_MARK: &str = " ";

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![header(view)];

    match &view.load {
        LoadState::Idle => {}
        LoadState::Loading => lines.push("Loading games...".to_string()),
        LoadState::Empty { .. } => {
            if let Some(message) = &view.message {
                lines.push(String::new());
                lines.push(message.clone());
            }
        }
        LoadState::Ready => {
            lines.push(String::new());
            lines.push(slider_line(view));
            lines.push(String::new());
            lines.push(format!("Filter: {}", view.filter_label));
            if view.cards.is_empty() {
                lines.push("  (no games match this filter)".to_string());
            }
            lines.extend(view.cards.iter().map(card_line));
            lines.push(view.page_summary.clone());
        }
    }
    lines
}

fn header(view: &AppViewModel) -> String {
    let state = match &view.load {
        LoadState::Idle => "Idle".to_string(),
        LoadState::Loading => "Loading".to_string(),
        LoadState::Ready => "Ready".to_string(),
        LoadState::Empty { reason: Some(reason) } => format!("Empty ({reason})"),
        LoadState::Empty { reason: None } => "Empty".to_string(),
    };
    let fetched = view
        .fetched_utc
        .as_deref()
        .map(|at| format!(" | Fetched: {at}"))
        .unwrap_or_default();
    format!(
        "Games catalog | {state}{fetched} | Favorites: {}",
        view.favorite_count
    )
}

fn slider_line(view: &AppViewModel) -> String {
    if view.slides.is_empty() {
        return "Slider: (empty)".to_string();
    }
    let slides: Vec<String> = view
        .slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            if index == view.current_slide {
                format!("[{}]", slide.slug)
            } else {
                slide.slug.clone()
            }
        })
        .collect();
    let paused = if view.slider_paused { " (paused)" } else { "" };
    format!("Slider{paused}: {}", slides.join("  "))
}

fn card_line(card: &CardView) -> String {
    let mark = if card.favorite {
        FAVORITE_MARK
    } else {
        PLAIN_MARK
    };
    let rating = card
        .rating
        .map(|rating| format!("{rating:.1}"))
        .unwrap_or_else(|| "-".to_string());
    let genres = if card.genres.is_empty() {
        "-"
    } else {
        card.genres.as_str()
    };
    format!("  {mark} {:<32} {rating:>4}  {genres}", card.slug)
}

pub fn help() -> Vec<String> {
    [
        "Commands:",
        "  next | prev             move the slider",
        "  hover | leave           pause or resume the slider",
        "  page next | page prev   move through the grid (pn / pp)",
        "  filter all              show every game",
        "  filter top-rated        rating 4.0 and above",
        "  filter genre <text>     genre name contains <text>",
        "  fav <slug>              toggle a favorite",
        "  reload                  fetch the catalog again",
        "  help | quit",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::SlideView;

    fn ready_view() -> AppViewModel {
        AppViewModel {
            load: LoadState::Ready,
            slides: vec![
                SlideView {
                    slug: "portal".to_string(),
                    image: None,
                },
                SlideView {
                    slug: "doom".to_string(),
                    image: None,
                },
            ],
            current_slide: 1,
            cards: vec![
                CardView {
                    slug: "portal".to_string(),
                    image: None,
                    genres: "Puzzle, Action".to_string(),
                    rating: Some(4.5),
                    favorite: true,
                },
                CardView {
                    slug: "doom".to_string(),
                    image: None,
                    genres: String::new(),
                    rating: None,
                    favorite: false,
                },
            ],
            page: 1,
            total_pages: 1,
            total_count: 2,
            page_summary: "Page 1 / 1 (2 total)".to_string(),
            filter_label: "All".to_string(),
            favorite_count: 1,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn ready_frame_marks_current_slide_and_favorites() {
        let lines = render(&ready_view());

        assert!(lines[0].contains("Ready"));
        assert!(lines[0].contains("Favorites: 1"));
        assert!(lines.iter().any(|l| l == "Slider: portal  [doom]"));
        let portal = lines.iter().find(|l| l.contains("4.5")).unwrap();
        assert!(portal.contains(FAVORITE_MARK));
        assert!(portal.contains("portal"));
        assert!(portal.contains("Puzzle, Action"));
        let doom = lines.iter().find(|l| l.starts_with("  ") && l.contains("doom")).unwrap();
        assert!(!doom.contains(FAVORITE_MARK));
        assert_eq!(lines.last().unwrap(), "Page 1 / 1 (2 total)");
    }

    #[test]
    fn paused_slider_is_labelled() {
        let view = AppViewModel {
            slider_paused: true,
            ..ready_view()
        };
        assert!(render(&view).iter().any(|l| l.starts_with("Slider (paused):")));
    }

    #[test]
    fn empty_state_shows_only_the_message() {
        let view = AppViewModel {
            load: LoadState::Empty { reason: None },
            message: Some("No games found.".to_string()),
            ..AppViewModel::default()
        };

        let lines = render(&view);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "No games found.");
        assert!(!lines.iter().any(|l| l.starts_with("Slider") || l.starts_with("Page")));
    }

    #[test]
    fn loading_state_has_placeholder() {
        let view = AppViewModel {
            load: LoadState::Loading,
            ..AppViewModel::default()
        };
        assert_eq!(render(&view)[1], "Loading games...");
    }

    #[test]
    fn help_lists_every_command() {
        let text = help().join("\n");
        for word in ["next", "hover", "page next", "top-rated", "genre", "fav", "reload", "quit"] {
            assert!(text.contains(word), "help is missing {word}");
        }
    }
}
