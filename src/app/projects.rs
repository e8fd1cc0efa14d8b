use leptos::{html, prelude::*};

use crate::{
    content::{Project, GITHUB_URL, PROJECTS},
    motion::Reveal,
};

use super::reveal::{use_in_view_once, Animated};

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="group transition-transform duration-300 hover:-translate-y-2.5">
            <div class="relative glass-dark rounded-3xl overflow-hidden border border-white/10">
                <div class="relative aspect-video overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        loading="lazy"
                        class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/90 via-black/30 to-transparent opacity-90"></div>
                    <div class="absolute top-4 left-4">
                        <span class="px-3 py-1 rounded-full bg-white/10 backdrop-blur-md text-white text-xs font-medium">
                            {project.category}
                        </span>
                    </div>
                    <a
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=format!("Open {}", project.title)
                        class="absolute top-4 right-4 p-3 rounded-full bg-white/10 backdrop-blur-md text-white opacity-0 group-hover:opacity-100 transition hover:scale-110 active:scale-95"
                    >
                        <i class="extra-external-link"></i>
                    </a>
                </div>
                <div class="p-6">
                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-2 py-1 rounded-md bg-white/5 text-white/60 text-xs font-medium">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <h3 class="text-xl font-display font-bold text-white mb-2 group-hover:text-primary transition-colors">
                        {project.title}
                    </h3>
                    <p class="text-sm text-white/60 leading-relaxed">{project.description}</p>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let in_view = use_in_view_once(container, "-120px");

    view! {
        <section id="projects" class="section-padding relative overflow-hidden hero-gradient">
            <div class="absolute top-24 right-24 w-80 h-80 rounded-full bg-primary/10 blur-3xl animate-orb-slow"></div>

            <div node_ref=container class="container mx-auto relative z-10">
                <Animated
                    motion=Reveal::fade_up(32.0).duration(700)
                    show=in_view
                    class="text-center max-w-3xl mx-auto mb-20"
                >
                    <span class="inline-flex items-center px-4 py-1.5 rounded-full bg-white/10 text-white/80 text-sm font-medium mb-5">
                        "Selected Works"
                    </span>
                    <h2 class="text-3xl md:text-5xl font-display font-bold text-white mb-5">
                        "Featured " <span class="gradient-text">"Deployments"</span>
                    </h2>
                    <p class="text-lg text-white/60 mb-8">
                        "Architecting scalable digital solutions using MERN and modern frontend tooling"
                    </p>
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-1 px-5 py-2 rounded-xl border border-white/20 text-white hover:bg-white/10"
                    >
                        <i class="devicon-github-plain mr-1"></i>
                        "View All Repos"
                    </a>
                </Animated>

                <div class="grid md:grid-cols-2 gap-10">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <Animated motion=Reveal::fade_up(32.0).stagger(index, 150) show=in_view>
                                    <ProjectCard project=*project />
                                </Animated>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
