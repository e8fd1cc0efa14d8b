use leptos::{html, prelude::*};

use crate::{
    content::{ContactMethod, CONTACT_METHODS, LOCATION},
    motion::Reveal,
};

use super::reveal::{use_in_view_once, Animated};

#[component]
fn ContactCard(method: ContactMethod) -> impl IntoView {
    let (target, rel) = if method.external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };
    view! {
        <a
            href=method.href
            target=target
            rel=rel
            class="group p-6 rounded-2xl glass-card text-center block transition-transform hover:scale-[1.03] hover:-translate-y-2 active:scale-[0.98]"
        >
            <div class="inline-flex p-4 rounded-2xl accent-gradient mb-4 group-hover:shadow-glow transition-shadow">
                <i class=format!("{} text-white text-2xl", method.icon)></i>
            </div>
            <h3 class="font-display font-semibold mb-1">{method.label}</h3>
            <p class="text-sm text-muted-foreground mb-3">{method.value}</p>
            <span class="inline-flex items-center gap-2 text-sm text-primary font-medium group-hover:gap-3 transition-all">
                {method.action}
                <i class="extra-send"></i>
            </span>
        </a>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let in_view = use_in_view_once(container, "-100px");

    view! {
        <section id="contact" class="section-padding bg-secondary/30 relative overflow-hidden">
            <div class="absolute bottom-0 right-0 w-1/2 h-1/2 bg-gradient-to-tl from-primary/5 to-transparent blur-3xl"></div>

            <div node_ref=container class="container mx-auto relative z-10">
                <Animated motion=Reveal::fade_up(30.0) show=in_view class="text-center mb-16">
                    <span class="inline-block px-4 py-1.5 rounded-full bg-primary/10 text-primary text-sm font-medium mb-4">
                        "Get In Touch"
                    </span>
                    <h2 class="text-3xl md:text-5xl font-display font-bold mb-4">
                        "Let's Build Something"
                        <br />
                        <span class="gradient-text">"Extraordinary"</span>
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "I'm currently seeking new opportunities to solve complex problems. Whether you have a specific project or just want to connect, my inbox is always open."
                    </p>
                </Animated>

                <div class="grid md:grid-cols-3 gap-6 max-w-4xl mx-auto mb-12">
                    {CONTACT_METHODS
                        .iter()
                        .enumerate()
                        .map(|(index, method)| {
                            view! {
                                <Animated motion=Reveal::fade_up(30.0).duration(500).stagger(index, 100) show=in_view>
                                    <ContactCard method=*method />
                                </Animated>
                            }
                        })
                        .collect_view()}
                </div>

                <Animated motion=Reveal::fade_up(20.0).delay(400) show=in_view class="text-center">
                    <div class="inline-flex items-center gap-3 px-6 py-4 rounded-2xl glass-card">
                        <div class="p-2 rounded-xl bg-primary/10">
                            <i class="extra-location text-primary text-xl"></i>
                        </div>
                        <div class="text-left">
                            <p class="text-xs text-muted-foreground uppercase tracking-wider">
                                "Current Location"
                            </p>
                            <p class="font-medium">{LOCATION}</p>
                        </div>
                        <span class="ml-4 px-3 py-1 rounded-full bg-green-500/10 text-green-600 text-xs font-medium">
                            "Available for Remote"
                        </span>
                    </div>
                </Animated>
            </div>
        </section>
    }
}
