use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::content::{BRAND, SOCIAL_LINKS};

fn build_time() -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[component]
pub fn Footer() -> impl IntoView {
    let built = build_time();
    let year = built.unwrap_or_else(Utc::now).year();

    view! {
        <footer class="py-8 px-4 bg-background border-t border-border/50">
            <div class="container mx-auto">
                <div class="flex flex-col md:flex-row items-center justify-between gap-6">
                    <a
                        href="#home"
                        class="font-display text-xl font-bold transition-transform hover:scale-105"
                    >
                        {BRAND}
                        <span class="gradient-text">"."</span>
                    </a>

                    <div class="flex items-center gap-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="p-3 rounded-xl bg-secondary hover:bg-primary/10 transition-all hover:scale-110 hover:-translate-y-0.5 active:scale-95"
                                        aria-label=social.label
                                    >
                                        <i class=format!("{} text-xl", social.icon)></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="text-sm text-muted-foreground text-center md:text-right">
                        <p class="flex items-center gap-1 justify-center md:justify-end">
                            "Made with " <i class="extra-heart text-primary"></i> " by Himanshu"
                        </p>
                        <p class="text-xs opacity-70">
                            {format!("© {year}")}
                            {built.map(|b| format!(" · built {}", b.format("%b %e %Y")))}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
