use leptos::prelude::*;

use crate::{
    content::{nav_section_ids, NavItem, BRAND, NAV_ITEMS, NAV_OFFSET, RESUME_URL},
    motion::Reveal,
};

use super::{
    reveal::{use_mounted, Animated},
    theme_toggle::ThemeToggle,
    use_active_section,
};

#[component]
fn ResumeLink(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <a
            href=RESUME_URL
            target="_blank"
            rel="noopener noreferrer"
            class=format!(
                "inline-flex items-center justify-center gap-2 px-5 py-2 rounded-xl accent-gradient text-white font-medium {class}",
            )
        >
            <i class="extra-download"></i>
            "Resume"
        </a>
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let active = use_active_section(
        Signal::stored(nav_section_ids()),
        Signal::stored(NAV_OFFSET),
    );
    let is_active = move |item: &NavItem| active.get().as_deref() == Some(item.id);
    let mounted = use_mounted();

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-50 px-4 py-4"
            style=move || Reveal::fade_up(-100.0).style(mounted.get())
        >
            <nav class="max-w-6xl mx-auto glass-card rounded-2xl px-6 py-4">
                <div class="flex items-center justify-between">
                    <a
                        href="#home"
                        class="font-display text-xl font-bold transition-transform hover:scale-105"
                    >
                        {BRAND}
                        <span class="gradient-text">"."</span>
                    </a>

                    <div class="hidden md:flex items-center gap-8">
                        {NAV_ITEMS
                            .iter()
                            .enumerate()
                            .map(|(index, item)| {
                                view! {
                                    <Animated
                                        motion=Reveal::fade_up(-10.0).delay(300).stagger(index, 100)
                                        show=mounted
                                    >
                                        <a
                                            href=item.href()
                                            class=move || {
                                                if is_active(item) {
                                                    "text-sm font-medium transition-colors relative group text-primary"
                                                } else {
                                                    "text-sm font-medium transition-colors relative group text-muted-foreground hover:text-foreground"
                                                }
                                            }
                                        >
                                            {item.label}
                                            <span
                                                class="absolute -bottom-1 left-0 h-0.5 bg-primary rounded-full transition-all duration-300 ease-out"
                                                style=move || {
                                                    if is_active(item) {
                                                        "width: 100%; opacity: 1;"
                                                    } else {
                                                        "width: 0%; opacity: 0;"
                                                    }
                                                }
                                            ></span>
                                        </a>
                                    </Animated>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="hidden md:flex items-center gap-3">
                        <ThemeToggle />
                        <ResumeLink />
                    </div>

                    <button
                        class="md:hidden p-2"
                        aria-label="Toggle menu"
                        on:click=move |_| set_is_open.update(|open| *open = !*open)
                    >
                        <i class=move || {
                            if is_open.get() { "extra-close text-2xl" } else { "extra-menu text-2xl" }
                        }></i>
                    </button>
                </div>

                <Show when=move || is_open.get()>
                    <div class="md:hidden pt-4 pb-2 animate-expand">
                        <div class="flex flex-col gap-4">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <a
                                            href=item.href()
                                            class=move || {
                                                if is_active(item) {
                                                    "text-sm font-medium transition-colors flex items-center gap-2 text-primary"
                                                } else {
                                                    "text-sm font-medium transition-colors flex items-center gap-2 text-muted-foreground hover:text-foreground"
                                                }
                                            }
                                            on:click=move |_| set_is_open.set(false)
                                        >
                                            <Show when=move || is_active(item)>
                                                <span class="w-1.5 h-1.5 rounded-full bg-primary"></span>
                                            </Show>
                                            {item.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <div class="flex items-center gap-3">
                                <ThemeToggle />
                                <ResumeLink class="flex-1" />
                            </div>
                        </div>
                    </div>
                </Show>
            </nav>
        </header>
    }
}
