use log::{info, Level};
use yew::prelude::*;

mod content;
mod hooks;
mod listener;
mod scroll;
mod components {
    pub mod background;
    pub mod hero;
    pub mod navigation;
    pub mod practice_card;
    pub mod session_card;
}

use components::background::ParticleBackground;
use components::hero::Hero;
use components::navigation::Navigation;
use components::practice_card::PracticeCard;
use components::session_card::SessionCard;
use hooks::{use_mouse_parallax, use_scroll_tracker};
use scroll::ScrollState;

const PAGE_STYLES: &str = r#"
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        background: #0a192f;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        overflow-x: hidden;
    }
    .particle-backdrop {
        position: fixed;
        inset: 0;
        z-index: 0;
    }
    .page-content { position: relative; z-index: 10; }
    .progress-bar {
        position: fixed;
        top: 0;
        left: 0;
        height: 4px;
        z-index: 50;
        background: linear-gradient(to right, #34d399, #d946ef, #06b6d4);
        transition: width 0.2s ease-out;
    }
    .breath-widget {
        position: fixed;
        top: 1rem;
        right: 1rem;
        z-index: 50;
        background: rgba(0, 0, 0, 0.3);
        backdrop-filter: blur(8px);
        border-radius: 8px;
        padding: 12px;
        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
        font-size: 0.85rem;
        transition: transform 0.3s ease-out;
    }
    .breath-widget .breaths { color: #34d399; }
    .breath-widget .note { font-size: 0.7rem; color: #9ca3af; }
    .card-section { padding: 5rem 0; }
    .card-section .container {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .card-section h2 {
        font-size: 2.5rem;
        font-weight: bold;
        text-align: center;
        margin: 0 0 3rem;
        background: linear-gradient(to right, #34d399, #22d3ee);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    #journey h2 { background: linear-gradient(to right, #e879f9, #22d3ee); }
    .practice-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    .session-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    @media (min-width: 768px) {
        .practice-grid { grid-template-columns: 1fr 1fr; }
        .session-grid { grid-template-columns: 1fr 1fr; }
    }
    @media (min-width: 1024px) {
        .session-grid { grid-template-columns: 1fr 1fr 1fr; }
    }
"#;

#[function_component(App)]
fn app() -> Html {
    let scroll = use_scroll_tracker();
    let (drift_x, drift_y) = use_mouse_parallax();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<ScrollState> context={scroll}>
            <div class="page">
                <style>{ PAGE_STYLES }</style>
                <ParticleBackground />
                <div class="progress-bar" style={format!("width: {:.2}%;", scroll.progress)}></div>
                <div
                    class="breath-widget"
                    style={format!("transform: translate({:.1}px, {:.1}px);", drift_x, drift_y)}
                >
                    <div class="breaths">{ format!("Breaths: {}", scroll.breath_count) }</div>
                    <div class="note">{"Mindful Moments"}</div>
                </div>
                <div class="page-content">
                    <Navigation />
                    <section id="home">
                        <Hero />
                    </section>
                    <section id="practices" class="card-section">
                        <div class="container">
                            <h2>{"Mindfulness Practices"}</h2>
                            <div class="practice-grid">
                                { for content::PRACTICES.iter().cloned().enumerate().map(|(index, practice)| {
                                    html! { <PracticeCard key={practice.title} index={index} practice={practice.clone()} /> }
                                }) }
                            </div>
                        </div>
                    </section>
                    <section id="journey" class="card-section">
                        <div class="container">
                            <h2>{"Meditation Journey"}</h2>
                            <div class="session-grid">
                                { for content::SESSIONS.iter().cloned().enumerate().map(|(index, session)| {
                                    html! { <SessionCard key={session.practice} index={index} session={session.clone()} /> }
                                }) }
                            </div>
                        </div>
                    </section>
                </div>
            </div>
        </ContextProvider<ScrollState>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
