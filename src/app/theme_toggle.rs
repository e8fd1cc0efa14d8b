use leptos::{either::Either, prelude::*};

use super::{reveal::use_mounted, ThemeContext};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();
    let mounted = use_mounted();

    move || {
        // the stored preference is only known in the browser
        if !mounted.get() {
            return Either::Left(view! { <div class="w-10 h-10 rounded-xl bg-secondary"></div> });
        }
        let current = theme.get();
        Either::Right(view! {
            <button
                class="relative w-10 h-10 rounded-xl bg-secondary hover:bg-secondary/80 flex items-center justify-center overflow-hidden transition-colors hover:scale-105 active:scale-95"
                aria-label=current.toggle_label()
                on:click=move |_| set_theme.set(current.toggled())
            >
                <i class=if current.is_dark() {
                    "extra-moon text-primary animate-spin-in"
                } else {
                    "extra-sun text-primary animate-spin-in"
                }></i>
            </button>
        })
    }
}
