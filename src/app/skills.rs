use leptos::{html, prelude::*};

use crate::{
    content::{Skill, SKILL_CATEGORIES},
    motion::Reveal,
};

use super::reveal::{use_in_view_once, Animated};

#[component]
fn SkillTile(skill: Skill, motion: Reveal, show: Signal<bool>) -> impl IntoView {
    view! {
        <Animated motion=motion show=show>
            <div class="group p-6 rounded-2xl glass-card flex flex-col items-center gap-3 cursor-default transition-transform duration-200 hover:scale-105 hover:-translate-y-2">
                <div class="relative">
                    <div class="absolute inset-0 accent-gradient rounded-full opacity-0 group-hover:opacity-20 blur-xl transition-opacity duration-300"></div>
                    <img
                        src=skill.icon_url()
                        alt=skill.name
                        class="w-12 h-12 object-contain relative z-10 group-hover:scale-110 transition-transform duration-300"
                    />
                </div>
                <span class="text-sm font-medium text-muted-foreground group-hover:text-foreground transition-colors">
                    {skill.name}
                </span>
            </div>
        </Animated>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let in_view = use_in_view_once(container, "-100px");

    view! {
        <section id="skills" class="section-padding bg-background relative overflow-hidden">
            <div class="absolute inset-0">
                <div class="absolute top-1/4 right-0 w-96 h-96 bg-gradient-to-bl from-accent/5 to-transparent rounded-full blur-3xl"></div>
                <div class="absolute bottom-1/4 left-0 w-96 h-96 bg-gradient-to-tr from-primary/5 to-transparent rounded-full blur-3xl"></div>
            </div>

            <div node_ref=container class="container mx-auto relative z-10">
                <Animated motion=Reveal::fade_up(30.0) show=in_view class="text-center mb-16">
                    <span class="inline-block px-4 py-1.5 rounded-full bg-primary/10 text-primary text-sm font-medium mb-4">
                        "My Expertise"
                    </span>
                    <h2 class="text-3xl md:text-5xl font-display font-bold mb-4">
                        "Technical " <span class="gradient-text">"Arsenal"</span>
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Building modern applications with a cutting-edge tech stack"
                    </p>
                </Animated>

                <div class="space-y-12">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(category_index, category)| {
                            let category_delay = 100 * category_index as u32;
                            view! {
                                <Animated motion=Reveal::fade_up(30.0).delay(category_delay) show=in_view>
                                    <h3 class="text-xl font-display font-semibold mb-6 flex items-center gap-3">
                                        <span class="w-8 h-1 bg-gradient-to-r from-primary to-accent rounded-full"></span>
                                        {category.title}
                                    </h3>
                                    <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-4">
                                        {category
                                            .skills
                                            .iter()
                                            .enumerate()
                                            .map(|(skill_index, skill)| {
                                                let motion = Reveal::grow(0.8)
                                                    .duration(400)
                                                    .delay(category_delay)
                                                    .stagger(skill_index, 50);
                                                view! { <SkillTile skill=*skill motion show=in_view /> }
                                            })
                                            .collect_view()}
                                    </div>
                                </Animated>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
