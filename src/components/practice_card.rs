//! Practice card: one mindfulness practice with techniques and benefits,
//! revealed with a one-shot entrance animation when scrolled into view.

use yew::prelude::*;

use crate::content::Practice;
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct PracticeCardProps {
    pub practice: Practice,
    pub index: usize,
}

#[function_component(PracticeCard)]
pub fn practice_card(props: &PracticeCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let practice = &props.practice;

    // Cards alternate entrance direction and stagger by position.
    let side = if props.index % 2 == 0 {
        "from-left"
    } else {
        "from-right"
    };
    let delay = format!("animation-delay: {}ms;", props.index * 200);

    html! {
        <div
            ref={node}
            class={classes!("practice-card", side, revealed.then(|| "revealed"))}
            style={delay}
        >
            <style>
                {r#"
                    .practice-card {
                        background: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(16px);
                        border-radius: 1rem;
                        overflow: hidden;
                        opacity: 0;
                    }
                    @keyframes cardFromLeft {
                        from { opacity: 0; transform: translate(-50px, 50px); }
                        to { opacity: 1; transform: translate(0, 0); }
                    }
                    @keyframes cardFromRight {
                        from { opacity: 0; transform: translate(50px, 50px); }
                        to { opacity: 1; transform: translate(0, 0); }
                    }
                    .practice-card.revealed.from-left { animation: cardFromLeft 0.8s ease-out both; }
                    .practice-card.revealed.from-right { animation: cardFromRight 0.8s ease-out both; }
                    .practice-image {
                        aspect-ratio: 16 / 9;
                        overflow: hidden;
                    }
                    .practice-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .practice-card:hover .practice-image img { transform: scale(1.05); }
                    .practice-body { padding: 1.5rem; }
                    .practice-body h3 { color: #fff; margin: 0 0 0.75rem; }
                    .practice-body p { color: #d1d5db; margin: 0 0 1rem; }
                    .practice-body h4 {
                        font-size: 0.85rem;
                        color: #2dd4bf;
                        margin: 0 0 0.5rem;
                    }
                    .technique-row { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
                    .technique {
                        padding: 0.25rem 0.75rem;
                        background: rgba(19, 78, 74, 0.5);
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        color: #5eead4;
                    }
                    .benefit-list {
                        color: #d1d5db;
                        font-size: 0.85rem;
                        margin: 0 0 1.5rem;
                        padding-left: 1.25rem;
                    }
                    .guide-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #2dd4bf;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .guide-link:hover { color: #5eead4; }
                "#}
            </style>
            <div class="practice-image">
                <img src={practice.image_url} alt={practice.title} loading="lazy" />
            </div>
            <div class="practice-body">
                <h3>{ practice.title }</h3>
                <p>{ practice.description }</p>
                <h4>{"Techniques"}</h4>
                <div class="technique-row">
                    { for practice.techniques.iter().map(|technique| html! {
                        <span key={*technique} class="technique">{ *technique }</span>
                    }) }
                </div>
                <h4>{"Benefits"}</h4>
                <ul class="benefit-list">
                    { for practice.benefits.iter().map(|benefit| html! {
                        <li key={*benefit}>{ *benefit }</li>
                    }) }
                </ul>
                <a
                    class="guide-link"
                    href={practice.guide_url}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"View Guide \u{2197}"}
                </a>
            </div>
        </div>
    }
}
