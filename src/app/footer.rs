use leptos::prelude::*;

use crate::content::SiteContent;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

const NAVIGATION: [(&str, &str); 5] = [
    ("#hero", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

#[component]
pub fn Footer(site: &'static SiteContent) -> impl IntoView {
    let profile = &site.profile;
    let links = &site.links;
    let connect = [
        (links.github.clone(), "GitHub"),
        (links.linkedin.clone(), "LinkedIn"),
        (links.twitter.clone(), "Twitter"),
    ];

    view! {
        <footer id="contact" class="footer py-16 border-t border-muted/30">
            <div class="footer-container max-w-6xl mx-auto px-6">
                <div class="footer-content flex flex-col lg:flex-row justify-between gap-12">
                    <div class="footer-brand">
                        <a href="#hero" class="footer-logo text-2xl font-bold">
                            <span class="logo-text">{profile.short_name.clone()}</span>
                            <span class="logo-dot text-accent">"."</span>
                        </a>
                        <p class="footer-tagline text-muted mt-2">
                            "Building the future, one line of code at a time."
                        </p>
                    </div>

                    <div class="footer-links grid grid-cols-1 sm:grid-cols-3 gap-8">
                        <div class="footer-column flex flex-col gap-2">
                            <h4 class="font-bold">"Navigation"</h4>
                            {NAVIGATION
                                .iter()
                                .map(|(href, label)| view! { <a href=*href>{*label}</a> })
                                .collect_view()}
                        </div>

                        <div class="footer-column flex flex-col gap-2">
                            <h4 class="font-bold">"Projects"</h4>
                            {site
                                .projects
                                .iter()
                                .map(|project| {
                                    view! {
                                        <a
                                            href=project.github.clone()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            {project.title.clone()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="footer-column flex flex-col gap-2">
                            <h4 class="font-bold">"Connect"</h4>
                            {connect
                                .into_iter()
                                .map(|(href, label)| {
                                    view! {
                                        <a href=href target="_blank" rel="noopener noreferrer">
                                            {label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <a href=links.email.clone()>"Email"</a>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom flex flex-col sm:flex-row justify-between gap-2 mt-12 text-sm text-muted">
                    <p class="copyright">
                        {format!("© {BUILD_YEAR} {}. All rights reserved.", profile.name)}
                    </p>
                    <p class="made-with">
                        "Made with " <span class="heart">"❤️"</span> " and Rust + Leptos"
                    </p>
                </div>
            </div>
        </footer>
    }
}
