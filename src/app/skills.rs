use std::time::Duration;

use leptos::{
    html::{Div, Img},
    prelude::*,
};

use super::{
    icons::{Brand, BrandIcon},
    reveal::{use_reveal, Reveal, RevealOnScroll},
};
use crate::{
    content::{Links, SiteContent, Skill},
    interaction::EmbedStatus,
    motion::{Motion, Threshold},
};

const CATEGORY_STAGGER: Duration = Duration::from_millis(200);
const SKILL_MOTION: Motion = Motion::grow(0.8).duration(Duration::from_millis(400));
const SKILL_STAGGER: Duration = Duration::from_millis(50);

#[component]
pub fn Skills(site: &'static SiteContent) -> impl IntoView {
    let header = NodeRef::<Div>::new();
    let in_view = use_reveal(header, Threshold::SECTION);

    view! {
        <section id="skills" class="skills-section py-24">
            <div class="skills-container max-w-6xl mx-auto px-6">
                <Reveal when=in_view motion=Motion::rise(30.0) class="section-header" target=header>
                    <span class="section-label">"Expertise"</span>
                    <h2 class="section-title">"Skills & Technologies"</h2>
                    <p class="section-subtitle">
                        "A comprehensive toolkit for building modern, scalable applications"
                    </p>
                </Reveal>

                <div class="skills-categories grid grid-cols-1 md:grid-cols-3 gap-8">
                    {site
                        .skill_groups()
                        .into_iter()
                        .enumerate()
                        .map(|(cat_index, group)| {
                            let motion = Motion::rise(30.0).stagger(cat_index, CATEGORY_STAGGER);
                            view! {
                                <Reveal when=in_view motion class="skill-category">
                                    <h3 class="category-title text-xl font-bold mb-4">
                                        {group.category}
                                    </h3>
                                    <div class="category-skills grid grid-cols-2 gap-3">
                                        {group
                                            .skills
                                            .into_iter()
                                            .enumerate()
                                            .map(|(index, skill)| view! { <SkillCard skill index /> })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal
                    when=in_view
                    motion=Motion::rise(30.0).delay(Duration::from_millis(800))
                    class="coding-profiles-section mt-16"
                >
                    <h3 class="coding-section-title flex items-center gap-2 text-2xl font-bold">
                        <span class="title-icon">"💻"</span>
                        "Coding Profiles"
                    </h3>
                    <LeetCodeShowcase site />
                    <GfgShowcase site />
                    <CodolioShowcase site />
                    <AllProfiles site />
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static Skill, index: usize) -> impl IntoView {
    let motion = SKILL_MOTION.stagger(index, SKILL_STAGGER);
    view! {
        <RevealOnScroll motion>
            <div
                class="skill-card flex items-center gap-2 rounded-lg p-3"
                style=format!("--skill-color: {}", skill.color)
            >
                <span class="skill-card-icon">{skill.icon.clone()}</span>
                <span class="skill-card-name">{skill.name.clone()}</span>
            </div>
        </RevealOnScroll>
    }
}

#[component]
fn LeetCodeShowcase(site: &'static SiteContent) -> impl IntoView {
    let links = &site.links;
    view! {
        <div class="leetcode-showcase my-8">
            <div class="leetcode-header">
                <a
                    href=links.leetcode.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="platform-link flex items-center gap-3"
                >
                    <BrandIcon brand=Brand::LeetCode size=32 fill="#ffa116" />
                    <span>"LeetCode"</span>
                    <span class="problem-count">"800+ Problems"</span>
                </a>
            </div>

            <div class="leetcode-graph-container my-4">
                <img
                    src=links.leetcode_card.clone()
                    alt="LeetCode Stats"
                    class="leetcode-graph w-full"
                    loading="lazy"
                />
            </div>

            <div class="leetcode-badges">
                <h4 class="badges-title font-bold mb-2">"🏆 Badges Earned"</h4>
                <div class="badges-grid grid grid-cols-2 md:grid-cols-4 gap-4">
                    {site
                        .profile
                        .badges
                        .iter()
                        .map(|badge| {
                            view! {
                                <div class="badge-item flex flex-col items-center">
                                    <img src=badge.image.clone() alt=badge.alt.clone() loading="lazy" />
                                    <span>{badge.label.clone()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn GfgShowcase(site: &'static SiteContent) -> impl IntoView {
    view! {
        <div class="gfg-showcase my-8">
            <a
                href=site.links.geeksforgeeks.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="platform-link gfg-link flex items-center gap-3"
            >
                <BrandIcon brand=Brand::GeeksforGeeks size=32 fill="#2f8d46" />
                <span>"GeeksforGeeks"</span>
                <span class="problem-count gfg-count">"600+ Problems"</span>
            </a>
            <div class="gfg-stats flex gap-8 mt-4">
                <div class="gfg-stat-item flex flex-col">
                    <span class="stat-number">"600+"</span>
                    <span class="stat-label">"Problems Solved"</span>
                </div>
                <div class="gfg-stat-item flex flex-col">
                    <span class="stat-number">"Top"</span>
                    <span class="stat-label">"Coding Score"</span>
                </div>
                <div class="gfg-stat-item flex flex-col">
                    <span class="stat-number">"5⭐"</span>
                    <span class="stat-label">"Rating"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CodolioShowcase(site: &'static SiteContent) -> impl IntoView {
    let links = &site.links;
    view! {
        <div class="codolio-showcase my-8">
            <a
                href=links.codolio.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="platform-link codolio-link flex items-center gap-3"
            >
                <span class="codolio-icon">"📊"</span>
                <span>"Codolio"</span>
                <span class="view-profile">"View Full Profile →"</span>
            </a>
            <CodolioEmbed links status=RwSignal::new(EmbedStatus::default()) />
        </div>
    }
}

/// Codolio card image. If it fails to load it is hidden and a static link block shows instead.
#[component]
fn CodolioEmbed(links: &'static Links, status: RwSignal<EmbedStatus>) -> impl IntoView {
    let image = NodeRef::<Img>::new();
    let fail = move || {
        log::warn!("codolio card failed to load, showing fallback");
        status.set(EmbedStatus::Failed);
    };

    // a server-rendered image can fail before hydration attaches on:error
    Effect::new(move |_| {
        if let Some(img) = image.get() {
            if img.complete() && img.natural_width() == 0 {
                fail();
            }
        }
    });

    view! {
        <div class="codolio-embed mt-4">
            <img
                node_ref=image
                src=links.codolio_card.clone()
                alt="Codolio Profile"
                class="codolio-image"
                loading="lazy"
                style=move || status.get().image_style()
                on:error=move |_| fail()
            />
            <div class=move || status.get().fallback_class()>
                <p>"View my complete coding journey on Codolio"</p>
                <a
                    href=links.codolio.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="codolio-btn"
                >
                    "Visit Profile"
                </a>
            </div>
        </div>
    }
}

#[component]
fn AllProfiles(site: &'static SiteContent) -> impl IntoView {
    let links = &site.links;
    let chips = [
        (links.leetcode.clone(), "leetcode-chip", Some(Brand::LeetCode), "LeetCode"),
        (links.geeksforgeeks.clone(), "gfg-chip", Some(Brand::GeeksforGeeks), "GeeksforGeeks"),
        (links.codechef.clone(), "codechef-chip", Some(Brand::CodeChef), "CodeChef"),
        (links.codolio.clone(), "codolio-chip", None, "📊 Codolio"),
        (links.github.clone(), "github-chip", Some(Brand::GitHub), "GitHub"),
        (links.linkedin.clone(), "linkedin-chip", Some(Brand::LinkedIn), "LinkedIn"),
    ];

    view! {
        <div class="all-profiles-links my-8">
            <h4 class="profiles-title font-bold mb-4">"🔗 Connect on All Platforms"</h4>
            <div class="profiles-grid flex flex-wrap gap-3">
                {chips
                    .into_iter()
                    .map(|(href, chip, brand, label)| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class=format!("profile-chip {chip} inline-flex items-center gap-2")
                            >
                                {brand.map(|brand| view! { <BrandIcon brand size=20 /> })}
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
