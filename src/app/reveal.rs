use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::Reveal;

/// Becomes `true` once the target first intersects the viewport shrunk by
/// `margin`, then stops observing.
pub fn use_in_view_once(target: NodeRef<html::Div>, margin: &str) -> Signal<bool> {
    let (seen, set_seen) = signal(false);
    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|e| e.is_intersecting()) {
                set_seen.set(true);
            }
        },
        UseIntersectionObserverOptions::default().root_margin(margin.to_string()),
    );
    Effect::new(move |_| {
        if seen.get() {
            stop();
        }
    });
    seen.into()
}

/// `false` during SSR and hydration, `true` once running in the browser.
pub fn use_mounted() -> Signal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted.into()
}

#[component]
pub fn Animated(
    motion: Reveal,
    #[prop(into)] show: Signal<bool>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=class style=move || motion.style(show.get())>
            {children()}
        </div>
    }
}
