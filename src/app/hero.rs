use leptos::prelude::*;

use crate::{
    content::{OWNER_NAME, PROFILE_IMAGE},
    motion::Reveal,
};

use super::reveal::{use_mounted, Animated};

#[component]
fn InfoCard(icon: &'static str, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 px-4 py-3 rounded-xl glass-dark">
            <i class=format!("{icon} text-accent text-xl")></i>
            <div>
                <p class="text-xs text-white/50 uppercase tracking-wider">{label}</p>
                <p class="text-sm font-medium">{value}</p>
            </div>
        </div>
    }
}

#[component]
fn FloatingBadge(label: &'static str, value: &'static str, class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("absolute px-4 py-2 glass-dark rounded-xl animate-bob {class}")>
            <p class="text-xs text-accent uppercase tracking-wider">{label}</p>
            <p class="text-sm font-semibold text-white">{value}</p>
        </div>
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let mounted = use_mounted();
    let (first, last) = OWNER_NAME.split_once(' ').unwrap_or((OWNER_NAME, ""));

    view! {
        <section id="home" class="min-h-screen relative overflow-hidden grain-overlay">
            <div class="absolute inset-0 hero-gradient"></div>
            <div class="absolute top-20 right-20 w-72 h-72 rounded-full bg-primary/20 blur-3xl animate-orb"></div>
            <div class="absolute bottom-40 left-10 w-96 h-96 rounded-full bg-accent/10 blur-3xl animate-orb-slow"></div>

            <div class="relative z-10 container mx-auto px-4 pt-32 pb-20 min-h-screen flex items-center">
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-20 items-center w-full">
                    <div class="text-white order-2 lg:order-1">
                        <Animated motion=Reveal::fade_up(20.0) show=mounted>
                            <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full glass-dark mb-6">
                                <i class="extra-sparkles text-accent"></i>
                                <span class="text-sm font-medium">
                                    "Open to Internships & Full-Time Roles"
                                </span>
                            </div>
                        </Animated>
                        <Animated motion=Reveal::fade_up(30.0).delay(100) show=mounted>
                            <h1 class="text-5xl md:text-7xl font-display font-bold leading-tight mb-4">
                                {first}
                                <br />
                                <span class="gradient-text">{last}</span>
                            </h1>
                        </Animated>
                        <Animated motion=Reveal::fade_up(20.0).delay(200) show=mounted>
                            <h2 class="text-xl md:text-2xl font-medium text-white/80 mb-6">
                                "MERN Stack & React Native Developer"
                            </h2>
                        </Animated>
                        <Animated motion=Reveal::fade_up(20.0).delay(300) show=mounted>
                            <p class="text-lg text-white/60 max-w-lg mb-8 leading-relaxed">
                                "I specialize in building scalable, real-world applications and smart platforms. Focused on crafting seamless user experiences that solve complex problems."
                            </p>
                        </Animated>
                        <Animated
                            motion=Reveal::fade_up(20.0).delay(400)
                            show=mounted
                            class="flex flex-wrap gap-4 mb-10"
                        >
                            <InfoCard
                                icon="extra-building"
                                label="Current Role"
                                value="Digital Fly High Solutions"
                            />
                            <InfoCard
                                icon="extra-graduation-cap"
                                label="Education"
                                value="8th Sem, SAGE University"
                            />
                        </Animated>
                        <Animated
                            motion=Reveal::fade_up(20.0).delay(500)
                            show=mounted
                            class="flex flex-wrap gap-4"
                        >
                            <a
                                href="#contact"
                                class="px-8 py-4 rounded-xl accent-gradient text-white font-semibold text-lg"
                            >
                                "Let's Connect"
                            </a>
                            <a
                                href="#projects"
                                class="px-8 py-4 rounded-xl border border-white/20 text-white hover:bg-white/10 font-semibold text-lg"
                            >
                                "View Projects"
                            </a>
                        </Animated>
                    </div>

                    <Animated
                        motion=Reveal::grow(0.8).duration(800).delay(300)
                        show=mounted
                        class="order-1 lg:order-2 flex justify-center lg:justify-end"
                    >
                        <div class="relative">
                            <div class="absolute inset-0 accent-gradient rounded-3xl blur-3xl opacity-30 scale-110"></div>
                            <div class="relative w-72 h-80 md:w-80 md:h-96 rounded-3xl overflow-hidden border-4 border-white/10 transition-transform duration-300 hover:scale-[1.02] hover:rotate-2">
                                <img
                                    src=PROFILE_IMAGE
                                    alt=OWNER_NAME
                                    class="w-full h-full object-cover object-top"
                                />
                                <div class="absolute inset-0 bg-gradient-to-t from-black/40 via-transparent to-transparent"></div>
                            </div>
                            <FloatingBadge label="Expertise" value="MERN Stack" class="-top-4 -right-4" />
                            <FloatingBadge
                                label="Focus"
                                value="React Native"
                                class="-bottom-4 -left-4 [animation-delay:1.5s]"
                            />
                        </div>
                    </Animated>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2">
                <Animated motion=Reveal::fade().delay(1500) show=mounted>
                    <a
                        href="#about"
                        class="flex flex-col items-center gap-2 text-white/50 hover:text-white transition-colors animate-nudge"
                    >
                        <span class="text-xs uppercase tracking-widest">"Scroll"</span>
                        <i class="extra-arrow-down"></i>
                    </a>
                </Animated>
            </div>
        </section>
    }
}
