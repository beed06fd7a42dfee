use std::time::Duration;

use leptos::prelude::*;

use super::{
    icons::{Glyph, GlyphIcon},
    reveal::{use_mounted, Reveal},
};
use crate::{content::Profile, motion::Motion};

const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

// The hero is above the fold, so it plays on load instead of waiting for a scroll.
const TEXT: Motion = Motion::rise(50.0).duration(ms(800)).delay(ms(200));
const GREETING: Motion = Motion::slide(-30.0).delay(ms(400));
const NAME: Motion = Motion::rise(30.0).delay(ms(600));
const ROLE: Motion = Motion::rise(30.0).delay(ms(800));
const DESCRIPTION: Motion = Motion::rise(30.0).delay(ms(1000));
const CTA: Motion = Motion::rise(30.0).delay(ms(1200));
const STATS: Motion = Motion::rise(50.0).duration(ms(800)).delay(ms(1400));
const SCROLL_HINT: Motion = Motion::fade().duration(ms(1000)).delay(ms(2000));

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let mounted = use_mounted();

    view! {
        <section id="hero" class="hero-section relative flex flex-col justify-center min-h-screen overflow-hidden">
            <div class="hero-canvas absolute inset-0 -z-10">
                <div class="animated-background">
                    <div class="gradient-orb orb-1"></div>
                    <div class="gradient-orb orb-2"></div>
                    <div class="gradient-orb orb-3"></div>
                </div>
            </div>

            <div class="hero-content max-w-6xl mx-auto px-6">
                <Reveal when=mounted motion=TEXT class="hero-text">
                    <Reveal when=mounted motion=GREETING class="hero-greeting text-lg text-muted">
                        "Hello, I'm"
                    </Reveal>
                    <Reveal when=mounted motion=NAME>
                        <h1 class="hero-name text-5xl lg:text-7xl font-bold">
                            {profile.name.clone()}
                        </h1>
                    </Reveal>
                    <Reveal when=mounted motion=ROLE>
                        <h2 class="hero-title text-2xl lg:text-3xl text-accent">
                            {profile.role.clone()}
                        </h2>
                    </Reveal>
                    <Reveal when=mounted motion=DESCRIPTION>
                        <p class="hero-description text-lg leading-relaxed max-w-2xl my-6">
                            "Building secure, scalable, and beautiful web applications."
                            <br />
                            "Passionate about cryptography, real-time systems & modern UI/UX."
                        </p>
                    </Reveal>
                    <Reveal when=mounted motion=CTA class="hero-cta flex flex-wrap gap-4">
                        <a href="#projects" class="btn btn-primary">
                            <span>"View Projects"</span>
                            <GlyphIcon glyph=Glyph::ArrowRight />
                        </a>
                        <a href="#contact" class="btn btn-secondary">
                            <span>"Get In Touch"</span>
                        </a>
                    </Reveal>
                </Reveal>

                <Reveal when=mounted motion=STATS class="hero-stats flex flex-wrap gap-8 mt-12">
                    {profile
                        .stats
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat-item flex flex-col">
                                    <span class="stat-number text-3xl font-bold">
                                        {stat.value.clone()}
                                    </span>
                                    <span class="stat-label text-sm text-muted">
                                        {stat.label.clone()}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>

            <Reveal when=mounted motion=SCROLL_HINT class="scroll-indicator absolute bottom-8 inset-x-0 flex flex-col items-center">
                <span>"Scroll Down"</span>
                <div class="scroll-arrow">
                    <GlyphIcon glyph=Glyph::ArrowDown />
                </div>
            </Reveal>
        </section>
    }
}
