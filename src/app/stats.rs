use chrono::Utc;
use leptos::{html, prelude::*, server_fn::codec::GetUrl};

#[cfg(feature = "ssr")]
use crate::profile::{get_profile_stats, ProfileConfig};
use crate::{
    content::{GITHUB_URL, HEATMAP_URL},
    motion::Reveal,
    profile::{loaded, ProfileStats, StatKind},
};

use super::reveal::{use_in_view_once, Animated};

#[server(input = GetUrl)]
pub async fn get_profile_stats_server() -> Result<ProfileStats, ServerFnError> {
    let config = ProfileConfig::from_env();
    get_profile_stats(&config.user).await.map_err(|e| {
        tracing::warn!(user = %config.user, error = %e, "profile stats unavailable");
        ServerFnError::new(e.to_string())
    })
}

#[component]
fn Counters(stats: Option<ProfileStats>, #[prop(into)] show: Signal<bool>) -> impl IntoView {
    let now = Utc::now();
    StatKind::ALL
        .iter()
        .enumerate()
        .map(|(index, kind)| {
            let value = kind.display(stats.as_ref(), now);
            view! {
                <Animated motion=Reveal::fade_up(30.0).duration(500).stagger(index, 100) show=show>
                    <div class="p-6 rounded-2xl glass-card text-center group cursor-default transition-transform hover:scale-105 hover:-translate-y-1">
                        <div class="inline-flex p-3 rounded-xl bg-gradient-to-br from-primary/10 to-accent/10 mb-4 group-hover:from-primary/20 group-hover:to-accent/20 transition-colors">
                            <i class=format!("{} text-primary text-2xl", kind.icon())></i>
                        </div>
                        <div class="text-3xl md:text-4xl font-display font-bold mb-1 gradient-text">
                            {value}
                        </div>
                        <div class="text-sm text-muted-foreground">{kind.label()}</div>
                    </div>
                </Animated>
            }
        })
        .collect_view()
}

#[component]
pub fn StatsSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let in_view = use_in_view_once(container, "-100px");
    // requested from the browser only, a failure keeps the placeholders
    let stats = LocalResource::new(move || async move { loaded(get_profile_stats_server().await) });

    view! {
        <section class="section-padding bg-background relative overflow-hidden">
            <div node_ref=container class="container mx-auto relative z-10">
                <Animated motion=Reveal::fade_up(30.0) show=in_view class="text-center mb-12">
                    <span class="inline-block px-4 py-1.5 rounded-full bg-primary/10 text-primary text-sm font-medium mb-4">
                        "Live Technical Evolution"
                    </span>
                    <h2 class="text-3xl md:text-5xl font-display font-bold">
                        "Growth " <span class="gradient-text">"Analytics"</span>
                    </h2>
                </Animated>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-12">
                    <Suspense fallback=move || view! { <Counters stats=None show=in_view /> }>
                        {move || Suspend::new(async move {
                            let stats = stats.await;
                            view! { <Counters stats=stats show=in_view /> }
                        })}
                    </Suspense>
                </div>

                <Animated
                    motion=Reveal::fade_up(30.0).delay(400)
                    show=in_view
                    class="p-8 rounded-3xl glass-card"
                >
                    <div class="flex flex-wrap items-center justify-between gap-4 mb-6">
                        <div>
                            <h3 class="text-lg font-display font-semibold mb-1">
                                "Code Activity Heatmap"
                            </h3>
                            <p class="text-sm text-muted-foreground">
                                "Real-time log of development consistency from @himanshu-patel9691"
                            </p>
                        </div>
                        <div class="flex items-center gap-4 text-xs text-muted-foreground">
                            <span class="flex items-center gap-2">
                                <span class="w-2 h-2 rounded-full bg-green-500"></span>
                                "API Connection: Secure"
                            </span>
                            <span class="flex items-center gap-2">
                                <span class="w-2 h-2 rounded-full bg-primary animate-pulse"></span>
                                "Deployment: Stable"
                            </span>
                        </div>
                    </div>

                    <div class="overflow-x-auto pb-4">
                        <img
                            src=HEATMAP_URL
                            alt="GitHub Contributions"
                            class="w-full min-w-[600px] rounded-xl"
                        />
                    </div>

                    <div class="text-center pt-4 border-t border-border/50">
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 text-sm text-primary hover:underline"
                        >
                            "Launch Full Repository View"
                            <span class="animate-nudge-x">"→"</span>
                        </a>
                    </div>
                </Animated>
            </div>
        </section>
    }
}
