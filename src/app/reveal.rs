use leptos::{either::Either, html::Div, prelude::*};
use leptos_use::{
    js, use_intersection_observer_with_options, use_supported, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::{Motion, RevealLatch, Threshold, Visibility};

/// Set on `<html>` by an inline script as soon as scripts run.
const SCRIPTED_CLASS: &str = "js";
/// Set on `<html>` once the app has hydrated.
const HYDRATED_CLASS: &str = "hydrated";
/// How long the inline script waits for hydration before giving up on animations.
const HYDRATION_GRACE_MS: u32 = 4000;

/// One-shot visibility signal for `target`.
///
/// Starts `false`, turns `true` the first time at least `threshold` of the
/// element is inside the viewport, and stays `true`. The observer is
/// disconnected once that happens. Browsers without IntersectionObserver
/// get `true` straight after mount.
pub fn use_reveal(target: NodeRef<Div>, threshold: Threshold) -> Signal<bool> {
    let (revealed, set_revealed) = signal(false);
    let latch = StoredValue::new(RevealLatch::new(threshold));
    let is_supported = use_supported(|| js!("IntersectionObserver" in &window()));

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let flipped = latch
                .try_update_value(|latch| {
                    entries.iter().any(|entry| {
                        latch.observe(Visibility::new(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        ))
                    })
                })
                .unwrap_or(false);
            if flipped {
                log::debug!("revealed at threshold {}", threshold.get());
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold.get()]),
    );

    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });

    // effects only run in the browser, after mount
    Effect::new(move |_| {
        if is_supported.get() {
            return;
        }
        if latch.try_update_value(RevealLatch::force).unwrap_or(false) {
            log::warn!("IntersectionObserver unavailable, showing content without reveal");
            set_revealed.set(true);
        }
    });

    revealed.into()
}

/// `false` during server render and the first client render, `true` once mounted.
pub fn use_mounted() -> Signal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted.into()
}

fn fallback_css() -> String {
    format!(
        "html:not(.{SCRIPTED_CLASS}) [data-reveal] \
         {{ opacity: 1 !important; transform: none !important; transition: none !important; }}"
    )
}

fn marker_script() -> String {
    format!(
        "(function(root){{root.classList.add('{SCRIPTED_CLASS}');\
         setTimeout(function(){{if(!root.classList.contains('{HYDRATED_CLASS}'))\
         {{root.classList.remove('{SCRIPTED_CLASS}');}}}},{HYDRATION_GRACE_MS});}})\
         (document.documentElement);"
    )
}

/// Head tags that keep server-rendered reveal wrappers visible when the app
/// never hydrates: scripts disabled, wasm failing to load, or a panic during
/// hydration.
#[component]
pub fn RevealFallback() -> impl IntoView {
    view! {
        <style inner_html=fallback_css()></style>
        <script inner_html=marker_script()></script>
    }
}

/// Tells [`RevealFallback`]'s script that reveal animations are live.
#[cfg(feature = "hydrate")]
pub fn mark_hydrated() {
    let Some(root) = document().document_element() else {
        return;
    };
    if root.class_list().add_1(HYDRATED_CLASS).is_err() {
        log::warn!("couldn't mark document as hydrated");
    }
}

/// Wraps `children` in a div that animates with `motion` when `when` turns true.
///
/// Pass `target` to make this div the element whose visibility drives `when`.
#[component]
pub fn Reveal(
    #[prop(into)] when: Signal<bool>,
    motion: Motion,
    #[prop(optional_no_strip, into)] class: Option<&'static str>,
    #[prop(optional)] target: NodeRef<Div>,
    children: Children,
) -> impl IntoView {
    let style = move || motion.style(when.get());
    match class {
        Some(class) => Either::Left(view! {
            <div node_ref=target data-reveal="" class=class style=style>
                {children()}
            </div>
        }),
        None => Either::Right(view! {
            <div node_ref=target data-reveal="" style=style>
                {children()}
            </div>
        }),
    }
}

/// A [`Reveal`] that observes itself.
#[component]
pub fn RevealOnScroll(
    motion: Motion,
    #[prop(optional)] threshold: Threshold,
    #[prop(optional)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let when = use_reveal(target, threshold);
    view! {
        <Reveal when motion class target>
            {children()}
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    const RISE: Motion = Motion::rise(30.0);

    #[test]
    fn test_reveal_renders_initial_pose_until_shown() {
        Owner::new().with(|| {
            let html = view! {
                <Reveal when=Signal::stored(false) motion=RISE>
                    <p>"content"</p>
                </Reveal>
            }
            .to_html();
            assert!(html.contains(&RISE.style(false)), "{html}");
            assert!(html.contains("opacity: 0;"));
            assert!(html.contains("<p>content</p>"));
        });
    }

    #[test]
    fn test_reveal_renders_rest_pose_once_shown() {
        Owner::new().with(|| {
            let html = view! {
                <Reveal when=Signal::stored(true) motion=RISE>
                    <p>"content"</p>
                </Reveal>
            }
            .to_html();
            assert!(html.contains(&RISE.style(true)), "{html}");
            assert!(html.contains("opacity: 1;"));
        });
    }

    #[test]
    fn test_use_reveal_starts_hidden_on_server() {
        Owner::new().with(|| {
            // nothing is observed or forced before the browser mounts the element
            let revealed = use_reveal(NodeRef::new(), Threshold::CARD);
            assert!(!revealed.get_untracked());
        });
    }

    #[test]
    fn test_reveal_on_scroll_is_marked_for_fallback() {
        Owner::new().with(|| {
            // the server can't observe anything, so this is what a client without wasm keeps
            let html = view! {
                <RevealOnScroll motion=RISE>
                    <p>"content"</p>
                </RevealOnScroll>
            }
            .to_html();
            assert!(html.contains("data-reveal"), "{html}");
            assert!(html.contains("opacity: 0;"));
            assert!(!html.contains("class="), "no class given: {html}");
        });
    }

    #[test]
    fn test_reveal_class_is_rendered_when_given() {
        Owner::new().with(|| {
            let html = view! {
                <Reveal when=Signal::stored(false) motion=RISE class="section-header">
                    "content"
                </Reveal>
            }
            .to_html();
            assert!(html.contains("class=\"section-header\""), "{html}");
        });
    }

    #[test]
    fn test_fallback_forces_wrappers_visible_without_script_marker() {
        let html = view! { <RevealFallback /> }.to_html();
        assert!(html.contains("<style>"), "{html}");
        assert!(html.contains("html:not(.js) [data-reveal]"));
        assert!(html.contains("opacity: 1 !important"));
        assert!(html.contains("transform: none !important"));
    }

    #[test]
    fn test_marker_is_dropped_when_hydration_never_finishes() {
        let script = marker_script();
        assert!(script.contains("classList.add('js')"));
        assert!(script.contains("classList.contains('hydrated')"));
        assert!(script.contains("classList.remove('js')"));
        assert!(script.contains(&HYDRATION_GRACE_MS.to_string()));
        assert!(!script.contains('<'));
    }
}
