use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::content::SITE_CONTENT;
use crate::scroll::{follow_nav_link, ScrollState};

use super::viewport::BrowserViewport;

#[component]
pub fn Header() -> impl IntoView {
    let content = &*SITE_CONTENT;
    let navigation = content.navigation.clone();
    let section_ids = StoredValue::new(
        navigation
            .iter()
            .map(|item| item.target_section_id.clone())
            .collect::<Vec<_>>(),
    );
    let scroll_state = RwSignal::new(ScrollState::new(content.default_section()));
    let is_scrolled = Memo::new(move |_| scroll_state.with(|s| s.is_past_threshold));
    let active_section = Memo::new(move |_| scroll_state.with(|s| s.active_section_id.clone()));
    let (menu_open, set_menu_open) = signal(false);

    // removed automatically when the header is disposed
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        section_ids.with_value(|ids| {
            scroll_state.update(|s| s.observe(&BrowserViewport, ids.iter().map(String::as_str)))
        });
    });

    let navigate = move |section_id: &str| {
        set_menu_open.update(|open| {
            follow_nav_link(&BrowserViewport, section_id, open);
        });
    };

    // rendered twice: desktop bar and mobile menu
    let nav_buttons = move |mobile: bool| {
        navigation
            .iter()
            .map(|item| {
                let id = item.target_section_id.clone();
                let is_active = {
                    let id = id.clone();
                    move || active_section.with(|a| *a == id)
                };
                let class = move || {
                    let base = if mobile {
                        "block w-full text-left px-4 py-3 rounded-lg font-medium transition-colors duration-200"
                    } else {
                        "px-4 py-2 font-medium transition-all duration-200 hover:scale-105 active:scale-95"
                    };
                    let state = match (is_active(), is_scrolled.get()) {
                        (true, _) if mobile => "text-blue-400 bg-blue-500/10",
                        (true, _) => "text-blue-400",
                        (false, true) => "text-gray-300 hover:text-blue-400",
                        (false, false) => "text-gray-300 hover:text-white",
                    };
                    format!("{base} {state}")
                };
                view! {
                    <button on:click=move |_| navigate(&id) class=class>
                        {item.display_name.clone()}
                    </button>
                }
            })
            .collect_view()
    };
    let desktop_nav = nav_buttons(false);

    view! {
        <header class=move || {
            let style = if is_scrolled.get() {
                "bg-gray-900/90 backdrop-blur-md border-b border-gray-800/50 shadow-lg"
            } else {
                "bg-transparent"
            };
            format!("fixed top-0 inset-x-0 z-50 transition-all duration-300 animate-slide-down {style}")
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        on:click=move |_| navigate("home")
                        class="flex items-center gap-3 animate-fade-in"
                    >
                        <span class=move || {
                            format!(
                                "w-10 h-10 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg flex items-center justify-center {}",
                                if is_scrolled.get() { "shadow-md" } else { "" },
                            )
                        }>
                            <span class="text-white font-bold text-lg">
                                {content.profile.initial().to_string()}
                            </span>
                        </span>
                        <span class="text-xl font-bold text-white">
                            {content.profile.full_name()}
                        </span>
                    </button>

                    <nav class="hidden md:flex items-center gap-2">{desktop_nav}</nav>

                    <button
                        on:click=move |_| navigate("contact")
                        class=move || {
                            let style = if is_scrolled.get() {
                                "bg-blue-600 hover:bg-blue-700 shadow-md"
                            } else {
                                "bg-blue-600/80 hover:bg-blue-600 backdrop-blur-sm border border-blue-400/30"
                            };
                            format!(
                                "hidden md:block px-6 py-2 rounded-full text-white font-semibold transition-all duration-300 hover:scale-105 active:scale-95 {style}",
                            )
                        }
                    >
                        "Let's Talk"
                    </button>

                    <button
                        class=move || {
                            let style = if is_scrolled.get() {
                                "text-gray-300 hover:text-white"
                            } else {
                                "text-white hover:text-blue-400"
                            };
                            format!("md:hidden p-2 text-2xl {style}")
                        }
                        aria-label="Toggle navigation"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if menu_open.get() {
                                Either::Left(view! { <i class="extra-close" /> })
                            } else {
                                Either::Right(view! { <i class="extra-menu" /> })
                            }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class=move || {
                    let style = if is_scrolled.get() {
                        "bg-gray-900/95 border-gray-800/50"
                    } else {
                        "bg-gray-900/80 border-gray-700/50"
                    };
                    format!("md:hidden backdrop-blur-md border-t animate-fade-in {style}")
                }>
                    <div class="px-4 py-4 space-y-1">{nav_buttons(true)}</div>
                </nav>
            </Show>
        </header>
    }
}
