//! Bottom navigation pill: progress bar, breath readout, section buttons.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::scroll::{ScrollState, SectionId, TOTAL_BREATHS};

fn scroll_to_section(section: SectionId) {
    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => return,
    };
    if let Some(element) = document.get_element_by_id(section.anchor()) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let scroll = use_context::<ScrollState>().unwrap_or_default();
    // A clicked section is pinned as active until the next scroll-derived
    // update recomputes the section from progress.
    let pinned = use_state_eq(|| None::<SectionId>);

    {
        let pinned = pinned.clone();
        use_effect_with_deps(
            move |_| {
                pinned.set(None);
                || ()
            },
            scroll.progress,
        );
    }

    let active = (*pinned).unwrap_or(scroll.section);
    let band_width = 100.0 / SectionId::ALL.len() as f64;

    html! {
        <nav class="bottom-nav">
            <style>
                {r#"
                    .bottom-nav {
                        position: fixed;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(16px);
                        border-radius: 9999px;
                        padding: 8px 16px;
                    }
                    .nav-progress {
                        position: absolute;
                        left: 0;
                        top: 50%;
                        transform: translateY(-50%);
                        height: 4px;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #2dd4bf, #a855f7, #3b82f6);
                        transition: width 0.3s ease;
                    }
                    .breath-readout {
                        position: absolute;
                        top: -4.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(16px);
                        border-radius: 8px;
                        padding: 8px;
                        text-align: center;
                        white-space: nowrap;
                        font-size: 0.8rem;
                    }
                    .breath-readout .count { font-weight: bold; font-size: 1.1rem; }
                    .breath-readout .total { font-size: 0.7rem; color: #9ca3af; }
                    .breath-readout .phase { font-size: 0.7rem; color: #2dd4bf; margin-top: 4px; }
                    .nav-buttons {
                        display: flex;
                        align-items: center;
                        gap: 16px;
                        position: relative;
                        z-index: 10;
                    }
                    .nav-section {
                        position: relative;
                        padding: 12px;
                        border: none;
                        border-radius: 9999px;
                        background: transparent;
                        color: #d1d5db;
                        font-size: 1.2rem;
                        cursor: pointer;
                        transition: background 0.2s ease, color 0.2s ease;
                    }
                    .nav-section:hover { color: #fff; background: rgba(13, 148, 136, 0.5); }
                    .nav-section.active { color: #fff; background: #0d9488; }
                    .nav-dot {
                        position: absolute;
                        bottom: -4px;
                        left: 50%;
                        transform: translateX(-50%) scale(0);
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: #4b5563;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .nav-dot.reached {
                        transform: translateX(-50%) scale(1);
                        background: #2dd4bf;
                    }
                "#}
            </style>
            <div class="nav-progress" style={format!("width: {:.1}%;", scroll.progress)}></div>
            <div class="breath-readout">
                <div class="count">{ format!("{} breaths", scroll.breath_count) }</div>
                <div class="total">{ format!("of {}", TOTAL_BREATHS) }</div>
                <div class="phase">{ scroll.breath_phase.label() }</div>
            </div>
            <div class="nav-buttons">
                { for SectionId::ALL.iter().enumerate().map(|(index, section)| {
                    let section = *section;
                    let reached = scroll.progress >= index as f64 * band_width;
                    let onclick = {
                        let pinned = pinned.clone();
                        Callback::from(move |_| {
                            pinned.set(Some(section));
                            scroll_to_section(section);
                        })
                    };
                    html! {
                        <button
                            key={section.anchor()}
                            class={classes!("nav-section", (active == section).then(|| "active"))}
                            title={section.label()}
                            {onclick}
                        >
                            { section.icon() }
                            <span class={classes!("nav-dot", reached.then(|| "reached"))}></span>
                        </button>
                    }
                }) }
            </div>
        </nav>
    }
}
