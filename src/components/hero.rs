//! Hero section: the guide's profile, practice chips, highlights and links.

use yew::prelude::*;

use crate::content::PERSONAL_INFO;

#[function_component(Hero)]
pub fn hero() -> Html {
    let info = &PERSONAL_INFO;

    html! {
        <header class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                    }
                    .hero-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        position: relative;
                        z-index: 10;
                    }
                    @keyframes heroFadeUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes heroGlow {
                        0% { opacity: 0.5; transform: scale(1); }
                        50% { opacity: 0.8; transform: scale(1.2); }
                        100% { opacity: 0.5; transform: scale(1); }
                    }
                    .hero-glow {
                        position: absolute;
                        inset: -2.5rem;
                        border-radius: 9999px;
                        filter: blur(64px);
                        background: linear-gradient(to right,
                            rgba(16, 185, 129, 0.2),
                            rgba(217, 70, 239, 0.2),
                            rgba(6, 182, 212, 0.2));
                        animation: heroGlow 2s ease-in-out infinite;
                    }
                    .hero-item { animation: heroFadeUp 0.8s ease-out both; }
                    .hero-item:nth-child(2) { animation-delay: 0.3s; }
                    .hero-item:nth-child(3) { animation-delay: 0.6s; }
                    .hero-item:nth-child(4) { animation-delay: 0.9s; }
                    .hero-item:nth-child(5) { animation-delay: 1.2s; }
                    .hero-icons {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                        font-size: 2rem;
                    }
                    .hero-name {
                        font-size: 3.5rem;
                        font-weight: bold;
                        text-align: center;
                        margin: 0 0 1rem;
                        background: linear-gradient(to right, #34d399, #e879f9, #22d3ee);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-title { text-align: center; font-size: 1.5rem; color: #34d399; margin: 0 0 0.5rem; }
                    .hero-location { text-align: center; color: #d1d5db; margin: 0 0 2rem; }
                    .hero-panel {
                        background: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(16px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .hero-bio { font-size: 1.1rem; color: #d1d5db; line-height: 1.6; margin: 0; }
                    .hero-columns {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    @media (min-width: 768px) {
                        .hero-columns { grid-template-columns: 1fr 1fr; }
                    }
                    .hero-panel h3 { color: #34d399; margin: 0 0 1rem; }
                    .chip-row { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                    .chip {
                        padding: 0.25rem 0.75rem;
                        background: rgba(6, 78, 59, 0.5);
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        color: #6ee7b7;
                    }
                    .highlight-list { list-style: none; margin: 0; padding: 0; }
                    .highlight-list li {
                        color: #d1d5db;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 0.5rem;
                    }
                    .hero-links {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .hero-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        color: #fff;
                        text-decoration: none;
                        transition: transform 0.3s ease;
                    }
                    .hero-link:hover { transform: scale(1.05); }
                    .hero-link.contact { background: #059669; }
                    .hero-link.guide { background: #c026d3; }
                    .hero-link.github { background: #1f2937; }
                    .hero-link.linkedin { background: #0891b2; }
                "#}
            </style>
            <div class="hero-inner">
                <div class="hero-glow"></div>
                <div class="hero-icons hero-item">
                    <span>{"\u{1FAB7}"}</span>
                    <span>{"\u{1F319}"}</span>
                </div>
                <div class="hero-item">
                    <h1 class="hero-name">{ info.name }</h1>
                    <h2 class="hero-title">{ info.title }</h2>
                    <p class="hero-location">{ info.location }</p>
                </div>
                <div class="hero-panel hero-item">
                    <p class="hero-bio">{ info.bio }</p>
                </div>
                <div class="hero-columns hero-item">
                    <div class="hero-panel">
                        <h3>{"Practices"}</h3>
                        <div class="chip-row">
                            { for info.practices.iter().map(|practice| html! {
                                <span key={*practice} class="chip">{ *practice }</span>
                            }) }
                        </div>
                    </div>
                    <div class="hero-panel">
                        <h3>{"Highlights"}</h3>
                        <ul class="highlight-list">
                            { for info.highlights.iter().map(|highlight| html! {
                                <li key={*highlight}>{"\u{1F49A} "}{ *highlight }</li>
                            }) }
                        </ul>
                    </div>
                </div>
                <div class="hero-links hero-item">
                    <a class="hero-link contact" href={format!("mailto:{}", info.email)}>
                        {"\u{2709} Contact Me"}
                    </a>
                    <a class="hero-link guide" href={info.guide_url}>
                        {"\u{2B07} Download Guide"}
                    </a>
                    <a class="hero-link github" href={info.github} target="_blank" rel="noopener noreferrer">
                        {"GitHub"}
                    </a>
                    <a class="hero-link linkedin" href={info.linkedin} target="_blank" rel="noopener noreferrer">
                        {"LinkedIn"}
                    </a>
                </div>
            </div>
        </header>
    }
}
