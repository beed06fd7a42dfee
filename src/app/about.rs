use std::time::Duration;

use leptos::{html::Div, prelude::*};

use super::{
    icons::{Brand, BrandIcon},
    reveal::{use_reveal, Reveal},
};
use crate::{
    content::SiteContent,
    interaction::CardFace,
    motion::{Motion, Threshold},
};

const DSA_CARD: &str = "/images/dsa-card.png";
const DEV_CARD: &str = "/images/dev-card.png";
const CONTRIBUTION_SNAKE: &str =
    "https://raw.githubusercontent.com/platane/platane/output/github-contribution-grid-snake-dark.svg";

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    (
        "🔐",
        "Security First",
        "Building with encryption & zero-knowledge architecture",
    ),
    (
        "⚡",
        "Performance Focused",
        "Optimizing for speed and scalability",
    ),
    (
        "🎨",
        "Design Oriented",
        "Creating beautiful, intuitive interfaces",
    ),
];

#[component]
pub fn About(site: &'static SiteContent) -> impl IntoView {
    let header = NodeRef::<Div>::new();
    let in_view = use_reveal(header, Threshold::SECTION);

    view! {
        <section id="about" class="about-section py-24">
            <div class="about-container max-w-6xl mx-auto px-6">
                <Reveal when=in_view motion=Motion::rise(30.0) class="section-header" target=header>
                    <span class="section-label">"About Me"</span>
                    <h2 class="section-title">"Who I Am"</h2>
                </Reveal>

                <div class="about-grid grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <Reveal
                        when=in_view
                        motion=Motion::slide(-50.0).delay(Duration::from_millis(200))
                        class="about-visual-section"
                    >
                        <div class="codolio-profile">
                            <FlipCard />
                        </div>
                    </Reveal>

                    <Reveal
                        when=in_view
                        motion=Motion::slide(50.0).delay(Duration::from_millis(300))
                        class="about-content"
                    >
                        <Bio />
                        <div class="about-highlights flex flex-col gap-4 mt-8">
                            {HIGHLIGHTS
                                .iter()
                                .map(|(icon, title, text)| {
                                    view! {
                                        <div class="highlight-item flex gap-4 items-start">
                                            <div class="highlight-icon text-2xl">{*icon}</div>
                                            <div class="highlight-text flex flex-col">
                                                <strong>{*title}</strong>
                                                <span class="text-muted">{*text}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>

                <Reveal
                    when=in_view
                    motion=Motion::rise(50.0).delay(Duration::from_millis(500))
                    class="github-stats-section mt-16"
                >
                    <GitHubStats site />
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn FlipCard() -> impl IntoView {
    let (face, set_face) = signal(CardFace::default());

    view! {
        <div
            class=move || face.get().class()
            on:click=move |_| set_face.update(|f| *f = f.toggled())
            title="Click to flip"
        >
            <div class="flip-card-inner">
                <div class="flip-card-front">
                    <img src=DSA_CARD alt="DSA Profile Card" class="codolio-image" />
                </div>
                <div class="flip-card-back">
                    <img src=DEV_CARD alt="Dev Profile Card" class="codolio-image" />
                </div>
            </div>
        </div>
    }
}

#[component]
fn Bio() -> impl IntoView {
    view! {
        <p class="about-text">
            "I'm a passionate " <span class="highlight">"Full Stack Developer"</span>
            " with a deep interest in building secure, performant, and user-friendly web applications. I love tackling complex problems and turning ideas into reality through code."
        </p>
        <p class="about-text">
            "My expertise spans across modern frontend frameworks like "
            <span class="highlight">"React"</span> " and " <span class="highlight">"Next.js"</span>
            ", robust backend technologies including " <span class="highlight">"Node.js"</span>
            " and " <span class="highlight">"Python"</span> ", and I have a strong focus on "
            <span class="highlight">"cryptography"</span> " and "
            <span class="highlight">"security"</span> "."
        </p>
        <p class="about-text">
            "With " <span class="highlight">"800+ LeetCode"</span> " problems and "
            <span class="highlight">"600+ GeeksforGeeks"</span>
            " solutions, I've honed my algorithmic thinking and problem-solving skills. When I'm not coding production apps, you'll find me exploring the latest in web technologies and contributing to open-source."
        </p>
    }
}

#[component]
fn GitHubStats(site: &'static SiteContent) -> impl IntoView {
    let links = &site.links;

    view! {
        <h3 class="github-stats-title flex items-center gap-3 text-2xl font-bold">
            <BrandIcon brand=Brand::GitHub size=32 />
            "GitHub Stats"
        </h3>

        <div class="github-activity-graph my-6">
            <a href=links.github.clone() target="_blank" rel="noopener noreferrer">
                <img
                    src=links.activity_graph.clone()
                    alt="GitHub Activity Graph"
                    class="activity-graph-img w-full"
                    loading="lazy"
                />
            </a>
        </div>

        <div class="connect-section text-center my-8">
            <h4 class="text-xl font-bold mb-4">"🤝 Let's Connect!"</h4>
            <div class="connect-links flex flex-wrap justify-center gap-4">
                <a
                    href=links.linkedin.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="connect-btn linkedin"
                >
                    "LINKEDIN"
                </a>
                <a
                    href=links.leetcode.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="connect-btn leetcode"
                >
                    <span>"🔥"</span>
                    " LEETCODE"
                </a>
                <a
                    href=links.geeksforgeeks.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="connect-btn gfg"
                >
                    <span>"💚"</span>
                    " GEEKSFORGEEKS"
                </a>
            </div>
        </div>

        <div class="snake-contribution my-6">
            <a href=links.github.clone() target="_blank" rel="noopener noreferrer">
                <img
                    src=CONTRIBUTION_SNAKE
                    alt="Snake eating contributions"
                    class="snake-img w-full"
                    loading="lazy"
                />
            </a>
        </div>

        <div class="happy-coding text-center">
            <p>"💻 Happy Coding!"</p>
            <div class="coding-badges flex justify-center gap-3 mt-2">
                <span class="badge built-with">"BUILT WITH ❤️"</span>
                <span class="badge powered-by">"POWERED BY COFFEE ☕"</span>
            </div>
        </div>
    }
}
