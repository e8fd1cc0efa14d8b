use leptos::{html, prelude::*};

use crate::{content::PHILOSOPHY, motion::Reveal};

use super::reveal::{use_in_view_once, Animated};

#[component]
pub fn AboutSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let in_view = use_in_view_once(container, "-100px");

    view! {
        <section id="about" class="section-padding bg-background relative overflow-hidden">
            <div class="absolute inset-0 opacity-30">
                <div class="absolute top-0 right-0 w-1/2 h-1/2 bg-gradient-to-bl from-primary/5 to-transparent"></div>
                <div class="absolute bottom-0 left-0 w-1/2 h-1/2 bg-gradient-to-tr from-accent/5 to-transparent"></div>
            </div>

            <div node_ref=container class="container mx-auto relative z-10">
                <Animated motion=Reveal::fade_up(30.0) show=in_view class="text-center mb-16">
                    <span class="inline-block px-4 py-1.5 rounded-full bg-primary/10 text-primary text-sm font-medium mb-4">
                        "Discovery"
                    </span>
                    <h2 class="text-3xl md:text-5xl font-display font-bold mb-4">
                        "Transforming complex code into"
                        <br />
                        <span class="gradient-text">"seamless user experiences"</span>
                    </h2>
                </Animated>

                <div class="grid lg:grid-cols-5 gap-12 items-start">
                    <Animated
                        motion=Reveal::slide(-30.0).delay(200)
                        show=in_view
                        class="lg:col-span-3 space-y-6"
                    >
                        <p class="text-lg text-muted-foreground leading-relaxed">
                            "I am " <strong class="text-foreground">"Himanshu Patel"</strong>
                            ", a Software Engineering student (8th Sem) at SAGE University, Indore, driven by the challenge of full-stack architecture."
                        </p>
                        <p class="text-lg text-muted-foreground leading-relaxed">
                            "Currently, as a Full-Stack Developer intern at "
                            <strong class="text-foreground">"Digital Fly High Solutions"</strong>
                            ", I specialize in the MERN ecosystem and React Native. I don't just write code; I build tools that solve user pain points, from dynamic e-commerce logic like ExpireEx to performance-optimized mobile interfaces."
                        </p>
                        <p class="text-lg text-muted-foreground leading-relaxed">
                            "With a solid foundation in JavaScript fundamentals and Data Structures, I focus on creating clean, scalable APIs and intuitive frontend designs that bridge the gap between backend complexity and human interaction."
                        </p>
                        <Animated
                            motion=Reveal::fade_up(20.0).delay(400)
                            show=in_view
                            class="flex flex-wrap gap-3 pt-4"
                        >
                            <div class="flex items-center gap-2 px-4 py-2 rounded-xl bg-primary/10 border border-primary/20">
                                <div class="w-2 h-2 rounded-full bg-primary"></div>
                                <span class="text-sm font-medium">"MERN Stack"</span>
                            </div>
                            <div class="flex items-center gap-2 px-4 py-2 rounded-xl bg-accent/10 border border-accent/20">
                                <i class="extra-smartphone text-accent"></i>
                                <span class="text-sm font-medium">"React Native"</span>
                            </div>
                        </Animated>
                    </Animated>

                    <Animated
                        motion=Reveal::slide(30.0).delay(300)
                        show=in_view
                        class="lg:col-span-2 space-y-4"
                    >
                        <h3 class="text-sm font-medium text-muted-foreground uppercase tracking-wider mb-6">
                            "My Philosophy"
                        </h3>
                        {PHILOSOPHY
                            .iter()
                            .enumerate()
                            .map(|(index, item)| {
                                view! {
                                    <Animated
                                        motion=Reveal::fade_up(20.0).duration(500).delay(400).stagger(index, 100)
                                        show=in_view
                                    >
                                        <div class="p-5 rounded-2xl glass-card cursor-default group transition-transform hover:scale-[1.02] hover:translate-x-1">
                                            <div class="flex items-start gap-4">
                                                <div class="p-3 rounded-xl bg-gradient-to-br from-primary/10 to-accent/10 group-hover:from-primary/20 group-hover:to-accent/20 transition-colors">
                                                    <i class=format!("{} text-primary text-xl", item.icon)></i>
                                                </div>
                                                <div>
                                                    <h4 class="font-semibold text-foreground mb-1">{item.title}</h4>
                                                    <p class="text-sm text-muted-foreground">{item.description}</p>
                                                </div>
                                            </div>
                                        </div>
                                    </Animated>
                                }
                            })
                            .collect_view()}
                    </Animated>
                </div>
            </div>
        </section>
    }
}
