use leptos::prelude::*;

use crate::content::SITE_CONTENT;
use crate::markup::{particle_style, PARTICLES};

use super::viewport::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &SITE_CONTENT.profile;
    let focus_colors = ["text-blue-400", "text-purple-400", "text-pink-400"];

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden bg-gray-900"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-gray-900 via-blue-900/20 to-purple-900/20"></div>
            <div class="absolute inset-0">
                {(0..PARTICLES)
                    .map(|i| {
                        view! {
                            <div
                                class="absolute w-2 h-2 bg-blue-400/20 rounded-full"
                                style=particle_style(i)
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center space-y-8 animate-fade-up">
                <h1 class="text-6xl md:text-8xl lg:text-9xl font-bold">
                    <span class="block text-white mb-4">{profile.first_name.to_uppercase()}</span>
                    <span class="block bg-gradient-to-r from-pink-400 via-purple-400 to-blue-400 bg-clip-text text-transparent">
                        {profile.last_name.to_uppercase()}
                    </span>
                </h1>

                <div class="space-y-4">
                    <h2 class="text-2xl md:text-3xl text-gray-300 font-medium">
                        {profile.role.clone()}
                    </h2>
                    <p class="text-lg md:text-xl text-gray-400 max-w-3xl mx-auto leading-relaxed">
                        {profile.tagline.clone()}
                    </p>
                    <div class="flex items-center justify-center gap-4 text-lg">
                        {profile
                            .focus
                            .iter()
                            .enumerate()
                            .map(|(i, word)| {
                                let color = focus_colors[i % focus_colors.len()];
                                view! {
                                    {(i > 0).then(|| view! { <span class="text-gray-500">"•"</span> })}
                                    <span class=color>{word.clone()}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-6 pt-8">
                    <button
                        on:click=move |_| scroll_to_section("about")
                        class="bg-blue-600 hover:bg-blue-700 text-white px-8 py-4 rounded-full font-semibold text-lg transition-all duration-300 hover:scale-105 active:scale-95"
                    >
                        "Explore My Journey"
                    </button>
                    <button
                        on:click=move |_| scroll_to_section("contact")
                        class="border-2 border-gray-600 text-gray-300 px-8 py-4 rounded-full font-semibold text-lg hover:border-blue-400 hover:text-blue-400 transition-all duration-300 hover:scale-105 active:scale-95"
                    >
                        "Let's Connect"
                    </button>
                </div>

                <div class="flex items-center justify-center gap-6 pt-4">
                    {profile
                        .hero_links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label.clone()
                                    class="p-4 rounded-full bg-gray-800/50 backdrop-blur-sm border border-gray-700 hover:border-blue-400 hover:-translate-y-1 transition-all duration-300 text-gray-300 hover:text-blue-400 text-2xl"
                                >
                                    <i class=link.icon.clone() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <button
                on:click=move |_| scroll_to_section("about")
                aria-label="Scroll to about"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 p-3 rounded-full bg-gray-800/50 backdrop-blur-sm border border-gray-700 hover:border-blue-400 transition-all duration-300 text-gray-300 hover:text-blue-400 animate-bounce"
            >
                <i class="extra-arrow-down text-2xl" />
            </button>
        </section>
    }
}
