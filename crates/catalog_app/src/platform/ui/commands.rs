use catalog_core::{GameFilter, Msg};

use crate::platform::app::AppEvent;

/// Map one line of user input to an event. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_ascii_lowercase();
    let rest: Vec<&str> = words.collect();

    let event = match (command.as_str(), rest.as_slice()) {
        ("next" | "n", []) => AppEvent::Msg(Msg::NextSlide),
        ("prev" | "p", []) => AppEvent::Msg(Msg::PrevSlide),
        ("hover", []) => AppEvent::Msg(Msg::SliderHoverEnter),
        ("leave", []) => AppEvent::Msg(Msg::SliderHoverLeave),
        ("page", ["next" | "n"]) | ("pn", []) => AppEvent::Msg(Msg::NextPage),
        ("page", ["prev" | "p"]) | ("pp", []) => AppEvent::Msg(Msg::PrevPage),
        ("filter" | "f", [name, text @ ..]) => {
            let text = (!text.is_empty()).then(|| text.join(" "));
            match GameFilter::from_selection(name, text.as_deref()) {
                Some(filter) => AppEvent::Msg(Msg::FilterSelected(filter)),
                None => AppEvent::Unrecognized(line.trim().to_string()),
            }
        }
        ("fav" | "like", [slug]) => AppEvent::Msg(Msg::ToggleFavorite {
            slug: (*slug).to_string(),
        }),
        ("reload", []) => AppEvent::Msg(Msg::ReloadRequested),
        ("help" | "?", []) => AppEvent::Help,
        ("quit" | "q" | "exit", []) => AppEvent::Quit,
        _ => AppEvent::Unrecognized(line.trim().to_string()),
    };
    Some(event)
}
