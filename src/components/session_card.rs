//! Journey card: one past meditation session, revealed on first visibility.

use chrono::NaiveDate;
use yew::prelude::*;

use crate::content::Session;
use crate::hooks::use_reveal;

fn format_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

#[derive(Properties, PartialEq)]
pub struct SessionCardProps {
    pub session: Session,
    pub index: usize,
}

#[function_component(SessionCard)]
pub fn session_card(props: &SessionCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let session = &props.session;
    let delay = format!("animation-delay: {}ms;", props.index * 200);

    html! {
        <div
            ref={node}
            class={classes!("session-card", revealed.then(|| "revealed"))}
            style={delay}
        >
            <style>
                {r#"
                    .session-card {
                        background: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(16px);
                        border-radius: 1rem;
                        overflow: hidden;
                        opacity: 0;
                        transition: transform 0.3s ease;
                    }
                    .session-card:hover { transform: translateY(-5px); }
                    @keyframes sessionRise {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .session-card.revealed { animation: sessionRise 0.8s ease-out both; }
                    .session-image { aspect-ratio: 16 / 9; overflow: hidden; }
                    .session-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .session-card:hover .session-image img { transform: scale(1.05); }
                    .session-body { padding: 1.5rem; }
                    .session-head {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        margin-bottom: 1rem;
                    }
                    .session-head h3 { color: #fff; margin: 0; }
                    .session-location { color: #d1d5db; font-size: 0.9rem; margin-top: 0.25rem; }
                    .session-date { color: #2dd4bf; font-size: 0.9rem; white-space: nowrap; }
                    .session-meta {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                        color: #d1d5db;
                        font-size: 0.9rem;
                        margin-bottom: 1.5rem;
                    }
                    .session-insights { color: #d1d5db; font-size: 0.85rem; margin: 0; }
                "#}
            </style>
            <div class="session-image">
                <img
                    src={session.image_url}
                    alt={format!("{} at {}", session.practice, session.location)}
                    loading="lazy"
                />
            </div>
            <div class="session-body">
                <div class="session-head">
                    <div>
                        <h3>{ session.practice }</h3>
                        <div class="session-location">{"\u{1F4CD} "}{ session.location }</div>
                    </div>
                    <div class="session-date">{"\u{1F4C5} "}{ format_date(session.date) }</div>
                </div>
                <div class="session-meta">
                    <span>{"\u{23F1} "}{ session.duration }</span>
                    <span>{"\u{1F319} "}{ session.focus }</span>
                </div>
                <p class="session-insights">{ session.insights }</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_date;

    #[test]
    fn formats_iso_dates_for_display() {
        assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date("2024-01-10"), "Jan 10, 2024");
    }

    #[test]
    fn falls_back_to_raw_text_on_bad_input() {
        assert_eq!(format_date("someday"), "someday");
    }
}
