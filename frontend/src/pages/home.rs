use yew::prelude::*;

use crate::components::countdown_timer::CountdownTimer;
use crate::components::section::{AnimatedTitle, Section};
use crate::components::shapes::{BlurElement, GeometricShapes};
use crate::components::sponsor_tier::SponsorTier;
use crate::config;

#[function_component(Home)]
pub fn home() -> Html {
    let site = config::site();
    let event = &site.event;
    let animation = &site.animation;
    let target = use_memo(|_| event.countdown_target(), ());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <BlurElement class="blob-green blob-top-left" />
            <BlurElement class="blob-blue blob-right" />
            <BlurElement class="blob-green blob-bottom" />

            <GeometricShapes />

            <Section id="register">
                <div class="hero rise-slow">
                    <h1 class="hero-title">{&event.name}</h1>
                    <div class="hero-meta rise" style="animation-delay: 0.2s;">
                        <div class="hero-meta-item">
                            <span class="icon">{"📅"}</span>
                            <span>{&event.dates}</span>
                        </div>
                        <div class="hero-meta-dot">{"•"}</div>
                        <div class="hero-meta-item">
                            <span class="icon">{"📍"}</span>
                            <a href={event.venue_map_url.clone()} target="_blank" rel="noopener noreferrer">
                                {&event.venue}
                            </a>
                        </div>
                    </div>
                    <a href={event.register_url.clone()} class="register-cta">
                        {"Register Now"}
                        <span class="arrow">{"→"}</span>
                    </a>
                    <div class="hero-countdown">
                        <CountdownTimer target={*target} />
                    </div>
                </div>
            </Section>

            <Section id="venue">
                <div class="section-body">
                    <AnimatedTitle>{"Venue"}</AnimatedTitle>
                    <div class="venue-card rise" style="animation-delay: 0.2s;">
                        <h3>{&event.venue}</h3>
                        <p>{&event.dates}</p>
                        <a href={event.venue_map_url.clone()} target="_blank" rel="noopener noreferrer" class="venue-map-link">
                            {"Open in Maps →"}
                        </a>
                    </div>
                </div>
            </Section>

            <Section id="rules">
                <div class="section-body">
                    <AnimatedTitle>{"Hackathon Rules & Regulations"}</AnimatedTitle>
                    <div class="bullet-list">
                        { for site.rules.iter().enumerate().map(|(index, rule)| html! {
                            <p class="bullet slide-in" style={animation.stagger_style(index)}>
                                <span class="bullet-mark">{"•"}</span>{rule}
                            </p>
                        }) }
                    </div>
                </div>
            </Section>

            <Section id="coc">
                <div class="section-body">
                    <AnimatedTitle>{"Code of Conduct"}</AnimatedTitle>
                    <div class="prose">
                        <p>{&site.conduct.intro}</p>
                        <ul class="bullet-list">
                            { for site.conduct.items.iter().enumerate().map(|(index, item)| html! {
                                <li class="bullet slide-in" style={animation.stagger_style(index)}>
                                    <span class="bullet-mark">{"•"}</span>{item}
                                </li>
                            }) }
                        </ul>
                        <p class="coc-report-title">{"Reporting Code of Conduct Violations"}</p>
                        <p>
                            {"If you are being harassed, notice that someone else is being harassed, or come across a violation of the code of conduct, please contact a volunteer/organiser immediately. Participants can call "}
                            <b>{&site.conduct.report_phone}</b>
                            {" or email "}
                            <a href={format!("mailto:{}", site.conduct.report_email)} class="underline">
                                {&site.conduct.report_email}
                            </a>
                            {" for any reports or queries. All reporters will remain anonymous."}
                        </p>
                    </div>
                </div>
            </Section>

            <Section id="links">
                <div class="section-body">
                    <AnimatedTitle>{"Important Links"}</AnimatedTitle>
                    <div class="links-grid">
                        { for site.links.iter().enumerate().map(|(index, link)| html! {
                            <a href={link.url.clone()} key={link.title.clone()} class="link-card rise" style={animation.stagger_style(index)} target="_blank" rel="noopener noreferrer">
                                <h3>{&link.title}</h3>
                                <p>{&link.desc}</p>
                            </a>
                        }) }
                    </div>
                </div>
            </Section>

            <Section id="sponsors">
                <div class="section-body">
                    <AnimatedTitle>{"Our Sponsors"}</AnimatedTitle>
                    { for site.sponsor_tiers.iter().map(|tier| html! {
                        <SponsorTier tier={tier.clone()} />
                    }) }
                </div>
            </Section>

            <Section id="team">
                <div class="section-body wide">
                    <AnimatedTitle>{"Team"}</AnimatedTitle>
                    <div class="team-grid">
                        { for site.team.iter().enumerate().map(|(index, member)| html! {
                            <div class="team-member rise" style={animation.stagger_style(index)}>
                                <div class="team-avatar">{"👥"}</div>
                                <h3>{&member.name}</h3>
                                <p>{&member.title}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </Section>

            <Section id="about">
                <div class="section-body">
                    <AnimatedTitle>{format!("About {}", event.series)}</AnimatedTitle>
                    <div class="prose large">
                        { for site.about.iter().map(|paragraph| html! { <p>{paragraph}</p> }) }
                    </div>
                </div>
            </Section>

            <footer class="site-footer">
                <p>{&site.footer}</p>
            </footer>

            <style>
                {HOME_STYLES}
            </style>
        </div>
    }
}

const HOME_STYLES: &str = r#"
    .home-page {
        background: #ffffff;
        color: #1a1a1a;
        font-size: 1.125rem;
        position: relative;
        overflow: hidden;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }

    @keyframes rise {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes slideIn {
        from { opacity: 0; transform: translateX(-20px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes shapeIn {
        from { opacity: 0; transform: scale(0.8); }
        to { opacity: 0.15; transform: scale(1); }
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }

    .rise { animation: rise 0.8s ease-out both; }
    .rise-slow { animation: rise 1s cubic-bezier(0.6, -0.05, 0.01, 0.99) both; }
    .slide-in { animation: slideIn 0.8s ease-out both; }

    .reveal {
        opacity: 0;
        transform: translateY(50px);
        transition: opacity 0.8s cubic-bezier(0.6, -0.05, 0.01, 0.99),
                    transform 0.8s cubic-bezier(0.6, -0.05, 0.01, 0.99);
    }
    .reveal.slow { transition-duration: 1s; }
    .reveal.in-view {
        opacity: 1;
        transform: translateY(0);
    }

    .page-section {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 2rem;
        position: relative;
    }
    .section-body {
        max-width: 64rem;
        width: 100%;
        margin: 0 auto;
        position: relative;
        z-index: 10;
    }
    .section-body.wide { max-width: 72rem; }
    .section-title {
        font-size: 3rem;
        font-weight: 700;
        margin-bottom: 3rem;
    }

    .blur-blob {
        position: absolute;
        border-radius: 9999px;
        mix-blend-mode: multiply;
        filter: blur(64px);
        opacity: 0.15;
        animation: fadeIn 2s ease-out both;
    }
    .blob-green { background: rgba(74, 229, 74, 0.4); }
    .blob-blue { background: rgba(96, 165, 250, 0.4); }
    .blob-top-left { width: 800px; height: 800px; top: -400px; left: -300px; }
    .blob-right { width: 600px; height: 600px; top: 30%; right: -200px; }
    .blob-bottom { width: 700px; height: 700px; bottom: 0; left: 50%; transform: translateX(-50%); }

    .shapes-layer {
        position: fixed;
        inset: 0;
        pointer-events: none;
        overflow: hidden;
    }
    .shape {
        position: absolute;
        backdrop-filter: blur(12px);
        animation: shapeIn 1.5s ease-out both;
    }

    .hero {
        text-align: center;
        max-width: 64rem;
        margin: 0 auto;
        position: relative;
        z-index: 10;
    }
    .hero-title {
        font-size: 6rem;
        font-weight: 700;
        margin-bottom: 2rem;
    }
    .hero-meta {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        font-size: 1.25rem;
        color: rgba(26, 26, 26, 0.6);
        margin-bottom: 2rem;
    }
    .hero-meta-item { display: flex; align-items: center; gap: 0.75rem; }
    .hero-meta a { color: inherit; }
    .register-cta {
        display: inline-flex;
        align-items: center;
        gap: 0.75rem;
        background: #1a1a1a;
        color: #ffffff;
        padding: 1.25rem 2.5rem;
        border-radius: 9999px;
        font-size: 1.25rem;
        font-weight: 500;
        text-decoration: none;
        transition: background 0.3s;
    }
    .register-cta:hover { background: #000000; }
    .hero-countdown { margin: 3rem auto 5rem; max-width: 56rem; }

    .countdown { position: relative; }
    .countdown-glow {
        position: absolute;
        inset: 0;
        background: linear-gradient(to right, rgba(168, 85, 247, 0.05), rgba(59, 130, 246, 0.05));
        border-radius: 1.5rem;
        filter: blur(64px);
    }
    .countdown-panel {
        position: relative;
        background: rgba(255, 255, 255, 0.5);
        backdrop-filter: blur(12px);
        border-radius: 1.5rem;
        padding: 2rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .countdown-heading {
        font-size: 1.5rem;
        font-weight: 600;
        text-align: center;
        margin-bottom: 2rem;
    }
    .countdown-panel.started .countdown-heading { color: #16a34a; }
    .countdown-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1rem;
    }
    .countdown-block { position: relative; }
    .countdown-window { position: relative; overflow: hidden; }
    .countdown-face {
        background: #1a1a1a;
        color: #ffffff;
        border-radius: 1rem;
        padding: 1rem;
        aspect-ratio: 1 / 1;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
    }
    .countdown-value {
        font-size: 3rem;
        font-weight: 700;
        font-variant-numeric: tabular-nums;
    }
    .countdown-label {
        font-size: 0.875rem;
        margin-top: 0.25rem;
        color: rgba(255, 255, 255, 0.7);
    }
    .countdown-dots {
        position: absolute;
        top: 50%;
        right: -0.5rem;
        transform: translate(50%, -50%);
        display: flex;
        gap: 0.125rem;
    }
    .countdown-dots span {
        width: 0.25rem;
        height: 0.25rem;
        border-radius: 9999px;
        background: rgba(26, 26, 26, 0.4);
    }

    .venue-card {
        background: rgba(255, 255, 255, 0.5);
        border: 2px solid rgba(26, 26, 26, 0.1);
        border-radius: 0.75rem;
        padding: 2rem;
        font-size: 1.25rem;
    }
    .venue-map-link { color: #1a1a1a; font-weight: 600; }

    .bullet-list {
        list-style: none;
        padding: 0;
        font-size: 1.25rem;
        color: rgba(26, 26, 26, 0.6);
    }
    .bullet { display: flex; align-items: center; gap: 0.75rem; margin: 0 0 2rem; }
    .bullet-mark { color: #1a1a1a; }
    .prose { font-size: 1.25rem; color: rgba(26, 26, 26, 0.6); }
    .prose.large { font-size: 1.5rem; line-height: 1.6; }
    .coc-report-title { margin-top: 1.5rem; font-weight: 600; }
    .underline { text-decoration: underline; color: inherit; }

    .links-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 2rem;
    }
    .link-card {
        display: block;
        padding: 2rem;
        border-radius: 0.75rem;
        border: 2px solid rgba(26, 26, 26, 0.1);
        background: rgba(255, 255, 255, 0.5);
        color: #1a1a1a;
        text-decoration: none;
        transition: border-color 0.3s;
    }
    .link-card:hover { border-color: rgba(26, 26, 26, 0.2); }
    .link-card p { color: rgba(26, 26, 26, 0.7); }

    .sponsor-tier { border-radius: 0.75rem; padding: 1.5rem; margin-bottom: 2rem; }
    .sponsor-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1rem;
    }
    .sponsor-card {
        background: rgba(255, 255, 255, 0.8);
        padding: 1rem;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .sponsor-card img { max-width: 100%; height: auto; }
    .sponsor-empty { color: rgba(26, 26, 26, 0.5); }

    .team-grid {
        display: grid;
        grid-template-columns: repeat(5, 1fr);
        gap: 2rem;
    }
    .team-member { text-align: center; }
    .team-avatar {
        width: 6rem;
        height: 6rem;
        margin: 0 auto 1rem;
        border-radius: 9999px;
        background: rgba(26, 26, 26, 0.05);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 2rem;
        transition: transform 0.3s;
    }
    .team-avatar:hover { transform: scale(1.05); }
    .team-member h3 { font-size: 1.25rem; font-weight: 500; margin-bottom: 0.25rem; }
    .team-member p { font-size: 0.875rem; color: rgba(26, 26, 26, 0.6); }

    .site-footer {
        border-top: 1px solid rgba(26, 26, 26, 0.1);
        padding: 4rem 2rem;
        position: relative;
        z-index: 10;
        text-align: center;
        font-size: 1.25rem;
        color: rgba(26, 26, 26, 0.7);
        animation: fadeIn 1.5s ease-out both;
    }

    @media (max-width: 768px) {
        .hero-title { font-size: 4.5rem; }
        .hero-meta { flex-direction: column; }
        .hero-meta-dot { display: none; }
        .countdown-grid { grid-template-columns: repeat(2, 1fr); }
        .countdown-dots { display: none; }
        .links-grid { grid-template-columns: 1fr; }
        .sponsor-grid { grid-template-columns: repeat(2, 1fr); }
        .team-grid { grid-template-columns: repeat(2, 1fr); }
    }
"#;
