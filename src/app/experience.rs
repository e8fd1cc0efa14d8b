use leptos::{html, prelude::*};

use crate::{
    content::{TimelineEntry, TimelineKind, EXPERIENCE},
    motion::{Ease, Reveal},
};

use super::reveal::{use_in_view_once, Animated};

#[component]
fn TimelineCard(entry: TimelineEntry) -> impl IntoView {
    let badge = match entry.kind {
        TimelineKind::Work => "p-3 rounded-xl accent-gradient",
        TimelineKind::Education => "p-3 rounded-xl bg-primary",
    };
    view! {
        <div class="md:ml-20 p-6 md:p-8 rounded-2xl glass-card group transition-transform duration-200 hover:-translate-y-1.5 hover:scale-[1.01]">
            <div class="flex flex-wrap items-start justify-between gap-4 mb-4">
                <div class="flex items-center gap-3">
                    <div class=badge>
                        <i class=format!("{} text-white text-xl", entry.kind.icon())></i>
                    </div>
                    <span class="text-xs font-medium text-muted-foreground uppercase tracking-wider">
                        {entry.kind.heading()}
                    </span>
                </div>
                <div class="flex items-center gap-2 text-sm text-muted-foreground">
                    <i class="extra-calendar"></i>
                    {entry.period}
                </div>
            </div>

            <h3 class="text-xl md:text-2xl font-display font-bold mb-2 group-hover:text-primary transition-colors">
                {entry.title}
            </h3>
            <p class="text-lg font-medium text-primary mb-2">{entry.organization}</p>
            <p class="text-muted-foreground mb-4">{entry.description}</p>

            <ul class="space-y-2 mb-4">
                {entry
                    .highlights
                    .iter()
                    .map(|highlight| {
                        view! {
                            <li class="flex items-start gap-3 text-sm text-muted-foreground">
                                <span class="w-1.5 h-1.5 rounded-full bg-accent mt-2 flex-shrink-0"></span>
                                {*highlight}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="flex items-center gap-2 text-sm text-muted-foreground pt-4 border-t border-border/50">
                <i class="extra-location"></i>
                {entry.location}
            </div>
        </div>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let in_view = use_in_view_once(container, "-120px");

    view! {
        <section class="section-padding bg-secondary/30 relative overflow-hidden">
            <div class="absolute top-1/2 left-0 w-1/3 h-1/2 bg-gradient-to-r from-primary/5 to-transparent blur-3xl"></div>

            <div node_ref=container class="container mx-auto relative z-10">
                <Animated motion=Reveal::fade_up(30.0) show=in_view class="text-center mb-16">
                    <span class="inline-block px-4 py-1.5 rounded-full bg-primary/10 text-primary text-sm font-medium mb-4">
                        "6+ Months Journey"
                    </span>
                    <h2 class="text-3xl md:text-5xl font-display font-bold">
                        "Experience & " <span class="gradient-text">"Growth"</span>
                    </h2>
                </Animated>

                <div class="max-w-4xl mx-auto relative">
                    <div class="absolute left-8 top-0 bottom-0 w-px hidden md:block">
                        <Animated
                            motion=Reveal::draw_down().duration(1200)
                            show=in_view
                            class="h-full origin-top bg-gradient-to-b from-primary via-accent to-transparent"
                        >
                            ""
                        </Animated>
                    </div>
                    <div class="absolute left-[31px] top-0 bottom-0 w-[3px] bg-gradient-to-b from-primary/40 via-accent/40 to-transparent blur-md hidden md:block animate-glow"></div>

                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! {
                                <Animated
                                    motion=Reveal::slide(-40.0).delay(200).stagger(index, 200)
                                    show=in_view
                                    class="relative mb-14 last:mb-0"
                                >
                                    <div class="absolute left-6 top-8 hidden md:block z-10">
                                        <Animated
                                            motion=Reveal::grow(0.0)
                                                .ease(Ease::Spring)
                                                .delay(600)
                                                .stagger(index, 200)
                                            show=in_view
                                            class="w-5 h-5 rounded-full bg-background border-4 border-primary flex items-center justify-center"
                                        >
                                            <div class="w-2 h-2 rounded-full bg-primary"></div>
                                        </Animated>
                                    </div>
                                    <TimelineCard entry=*entry />
                                </Animated>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
