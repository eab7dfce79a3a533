use leptos::prelude::*;

use crate::content::SITE_CONTENT;
use crate::markup::{build_stamp, BUILD_TIME};

use super::viewport::{scroll_to_section, smooth_scroll_to};

#[component]
pub fn Footer() -> impl IntoView {
    let content = &*SITE_CONTENT;
    let profile = &content.profile;
    let (year, built) = build_stamp(BUILD_TIME).unzip();

    view! {
        <footer class="bg-slate-900 border-t border-slate-800 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="py-12 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    <div class="lg:col-span-2">
                        <div class="flex items-center gap-3 mb-6">
                            <div class="w-10 h-10 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg flex items-center justify-center">
                                <span class="text-white font-bold text-lg">
                                    {profile.initial().to_string()}
                                </span>
                            </div>
                            <div>
                                <h3 class="text-xl font-bold text-white">{profile.full_name()}</h3>
                                <p class="text-slate-400 text-sm">{profile.role.clone()}</p>
                            </div>
                        </div>
                        <p class="text-slate-300 leading-relaxed max-w-md mb-6">
                            {profile.footer_blurb.clone()}
                        </p>
                        <div class="flex items-center gap-2 text-slate-400 text-sm mb-6">
                            <span>"Made with"</span>
                            <i class="extra-heart text-red-500 animate-pulse" />
                            <span>"and lots of"</span>
                            <i class="extra-coffee text-amber-500" />
                        </div>
                    </div>

                    <div>
                        <h4 class="text-white font-semibold text-lg mb-6">"Quick Links"</h4>
                        <ul class="space-y-3">
                            {content
                                .navigation
                                .iter()
                                .map(|item| {
                                    let id = item.target_section_id.clone();
                                    view! {
                                        <li>
                                            <a
                                                href=format!("#{id}")
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    scroll_to_section(&id);
                                                }
                                                class="text-slate-400 hover:text-white transition-colors duration-300 hover:translate-x-1 inline-block"
                                            >
                                                {item.display_name.clone()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-white font-semibold text-lg mb-6">"Get In Touch"</h4>
                        <div class="space-y-3">
                            <p class="text-slate-400">{profile.email.clone()}</p>
                            <p class="text-slate-400">{profile.location.clone()}</p>
                            <p class="text-slate-400">{profile.availability.clone()}</p>
                        </div>
                        <div class="flex gap-3 mt-6">
                            {profile
                                .social_links
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href.clone()
                                            target=social.is_external().then_some("_blank")
                                            rel=social.is_external().then_some("noopener noreferrer")
                                            aria-label=social.label.clone()
                                            class="p-2 bg-slate-800 rounded-lg text-slate-400 hover:text-white hover:bg-slate-700 transition-all duration-300 hover:scale-110"
                                        >
                                            <i class=social.icon.clone() />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="py-6 border-t border-slate-800">
                    <div class="flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0">
                        <div class="text-slate-400 text-sm">
                            {year.map(|y| format!("© {y} ")).unwrap_or_else(|| "© ".to_string())}
                            {profile.full_name()}
                            ". All rights reserved."
                        </div>
                        <div class="text-slate-500 text-sm">
                            "This page is built with Rust, Leptos and Tailwind CSS"
                            {built.map(|b| format!(" · built {b}"))}
                        </div>
                        <button
                            on:click=move |_| smooth_scroll_to(0.0)
                            class="flex items-center gap-2 text-slate-400 hover:text-white transition-colors duration-300 text-sm group"
                        >
                            <span>"Back to Top"</span>
                            <i class="extra-arrow-up group-hover:-translate-y-1 transition-transform duration-300" />
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}
