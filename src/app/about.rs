use leptos::prelude::*;

use crate::content::SITE_CONTENT;
use crate::progress::{stagger_delay, STAGGER_STEP_MS};

use super::reveal::Reveal;

#[component]
pub fn About() -> impl IntoView {
    let content = &*SITE_CONTENT;
    let about = &content.about;

    view! {
        <section id="about" class="py-20 bg-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="text-center mb-16">
                    <div class="flex items-center justify-center gap-4 mb-6">
                        <div class="h-1 w-16 bg-gradient-to-r from-blue-400 to-transparent"></div>
                        <h2 class="text-lg font-medium text-gray-300 tracking-wider uppercase">
                            "About Me"
                        </h2>
                        <div class="h-1 w-16 bg-gradient-to-l from-purple-400 to-transparent"></div>
                    </div>
                    <h1 class="text-5xl md:text-7xl font-bold text-white mb-4">"My"</h1>
                    <h1 class="text-5xl md:text-7xl font-bold bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                        "Journey"
                    </h1>
                </Reveal>

                <div class="grid lg:grid-cols-3 gap-8 items-start mb-20">
                    <Reveal class="lg:col-span-2 space-y-8">
                        <div class="border-l-4 border-blue-400 pl-6">
                            <h3 class="text-2xl font-bold text-white mb-6">"Who I Am"</h3>
                            <div class="space-y-4 text-gray-300 leading-relaxed">
                                {content
                                    .profile
                                    .bio
                                    .iter()
                                    .map(|p| view! { <p>{p.clone()}</p> })
                                    .collect_view()}
                            </div>
                        </div>
                    </Reveal>

                    <Reveal class="space-y-6" delay_ms=200>
                        <div class="grid grid-cols-2 gap-4">
                            {about
                                .stats
                                .iter()
                                .enumerate()
                                .map(|(index, card)| {
                                    view! {
                                        <Reveal
                                            delay_ms=stagger_delay(index, STAGGER_STEP_MS)
                                            class=format!(
                                                "bg-gray-800/50 backdrop-blur-sm border border-gray-700 rounded-xl p-4 {}",
                                                card.color.hover_border_class(),
                                            )
                                        >
                                            <div class="text-center space-y-2">
                                                <div class=format!(
                                                    "inline-flex p-2 rounded-lg mb-2 {}",
                                                    card.color.soft_bg_class(),
                                                )>
                                                    <i class=format!(
                                                        "{} text-xl {}",
                                                        card.icon,
                                                        card.color.text_class(),
                                                    ) />
                                                </div>
                                                <h4 class=format!(
                                                    "text-lg font-bold {}",
                                                    card.color.text_class(),
                                                )>{card.title.clone()}</h4>
                                                <p class="text-gray-300 text-xs leading-tight">
                                                    {card.subtitle.clone()}
                                                </p>
                                            </div>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex items-center justify-center gap-3 pt-4">
                            <div class="w-3 h-3 bg-green-400 rounded-full animate-pulse"></div>
                            <span class="text-green-400 font-medium text-sm">
                                "Available for new projects"
                            </span>
                        </div>
                    </Reveal>
                </div>

                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">"What Drives Me"</h2>
                    <p class="text-xl text-gray-300 max-w-3xl mx-auto leading-relaxed">
                        "These core principles guide every project I work on, ensuring exceptional results every time."
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {about
                        .drives
                        .iter()
                        .enumerate()
                        .map(|(index, card)| {
                            view! {
                                <Reveal
                                    delay_ms=stagger_delay(index, STAGGER_STEP_MS)
                                    class=format!(
                                        "bg-gray-800/30 backdrop-blur-sm border border-gray-700 rounded-xl p-6 hover:bg-gray-800/50 {}",
                                        card.color.hover_border_class(),
                                    )
                                >
                                    <div class=format!(
                                        "inline-flex p-3 rounded-xl mb-4 {}",
                                        card.color.solid_bg_class(),
                                    )>
                                        <i class=format!("{} text-2xl text-white", card.icon) />
                                    </div>
                                    <h3 class="text-xl font-bold text-white mb-3">{card.title.clone()}</h3>
                                    <p class="text-gray-300 leading-relaxed">{card.description.clone()}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
