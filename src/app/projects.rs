use std::time::Duration;

use leptos::{html::Div, prelude::*};

use super::{
    icons::{Brand, BrandIcon, Glyph, GlyphIcon},
    reveal::{use_reveal, Reveal},
};
use crate::{
    content::Project,
    interaction::Glow,
    motion::{Motion, Threshold},
};

const CARD_MOTION: Motion = Motion::rise(50.0);
const CARD_STAGGER: Duration = Duration::from_millis(200);

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    let header = NodeRef::<Div>::new();
    let in_view = use_reveal(header, Threshold::SECTION);

    view! {
        <section id="projects" class="projects-section py-24">
            <div class="projects-container max-w-6xl mx-auto px-6">
                <Reveal when=in_view motion=Motion::rise(30.0) class="section-header" target=header>
                    <span class="section-label">"Featured Work"</span>
                    <h2 class="section-title">"Projects"</h2>
                    <p class="section-subtitle">
                        "A collection of projects showcasing my expertise in full-stack development, security, and real-time applications."
                    </p>
                </Reveal>

                <div class="projects-grid grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let card = NodeRef::<Div>::new();
    let in_view = use_reveal(card, Threshold::CARD);
    let (glow, set_glow) = signal(Glow::default());
    let motion = CARD_MOTION.stagger(index, CARD_STAGGER);
    let color = project.color.as_str();

    view! {
        <div
            node_ref=card
            data-reveal=""
            class="project-card rounded-xl overflow-hidden"
            style=move || format!("--accent-color: {color}; {}", motion.style(in_view.get()))
            on:mouseenter=move |_| set_glow.set(Glow::from_hover(true))
            on:mouseleave=move |_| set_glow.set(Glow::from_hover(false))
        >
            <div class="project-image-container relative">
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    class="project-image w-full"
                    loading="lazy"
                />
                <div class="project-image-overlay absolute inset-0"></div>
                <div
                    class="project-accent-glow absolute inset-0"
                    style=move || glow.get().style(color)
                ></div>
            </div>

            <div class="project-content p-6">
                <div class="project-header flex justify-between items-center">
                    <h3 class="project-title text-xl font-bold">{project.title.clone()}</h3>
                    <div class="project-links flex gap-3">
                        {project
                            .link
                            .clone()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="project-link"
                                        aria-label="Live demo"
                                    >
                                        <GlyphIcon glyph=Glyph::ExternalLink />
                                    </a>
                                }
                            })}
                        <a
                            href=project.github.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="project-link"
                            aria-label="Source on GitHub"
                        >
                            <BrandIcon brand=Brand::GitHub size=20 />
                        </a>
                    </div>
                </div>

                <p class="project-description my-4 text-muted">{project.description.clone()}</p>

                <div class="project-features flex flex-wrap gap-2">
                    {project
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <span class="feature-tag inline-flex items-center gap-1">
                                    <GlyphIcon glyph=Glyph::Check />
                                    {feature.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="project-tech flex flex-wrap gap-2 mt-4">
                    {project
                        .tech
                        .iter()
                        .map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
