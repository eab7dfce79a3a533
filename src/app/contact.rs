use leptos::{either::Either, prelude::*};

use crate::contact::{submit_draft, ContactDraft, ContactField, LogSubmitter, SubmitError};
use crate::content::{is_external, SITE_CONTENT};

use super::reveal::Reveal;

/// `target` and `rel` for a link, empty for in-site and mailto links.
fn link_target(href: &str) -> (Option<&'static str>, Option<&'static str>) {
    if is_external(href) {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let contact = &SITE_CONTENT.contact;
    view! {
        <section id="contact" class="py-20 bg-gradient-to-br from-gray-900 via-slate-900 to-gray-900 relative overflow-hidden">
            <div class="absolute inset-0 opacity-10 bg-[radial-gradient(circle_at_1px_1px,#4f46e5_1px,transparent_0)] bg-[length:40px_40px]"></div>
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-6xl font-bold text-white mb-6">
                        "Let's Create" <br />
                        <span class="bg-gradient-to-r from-blue-400 via-purple-400 to-pink-400 bg-clip-text text-transparent">
                            "Something Amazing"
                        </span>
                    </h2>
                    <p class="text-xl text-gray-300 max-w-3xl mx-auto leading-relaxed">
                        "Ready to bring your vision to life? Let's discuss your next project and create something extraordinary together."
                    </p>
                </Reveal>

                <div class="grid lg:grid-cols-2 gap-12">
                    <Reveal>
                        <h3 class="text-2xl font-bold text-white mb-4">"Get In Touch"</h3>
                        <p class="text-gray-300 leading-relaxed mb-8">{contact.intro.clone()}</p>
                        <div class="grid sm:grid-cols-2 gap-4 mb-8">
                            {contact
                                .methods
                                .iter()
                                .map(|method| {
                                    let (target, rel) = link_target(&method.href);
                                    view! {
                                        <a
                                            href=method.href.clone()
                                            target=target
                                            rel=rel
                                            class="flex items-center gap-4 p-4 rounded-xl bg-gray-800/50 border border-gray-700 hover:border-blue-400/50 hover:-translate-y-1 transition-all duration-300"
                                        >
                                            <div class=format!("p-3 rounded-lg {}", method.color.solid_bg_class())>
                                                <i class=format!("{} text-xl text-white", method.icon) />
                                            </div>
                                            <div>
                                                <h4 class="text-white font-semibold">{method.title.clone()}</h4>
                                                <p class="text-gray-400 text-sm">{method.subtitle.clone()}</p>
                                                <p class="text-blue-400 text-sm">{method.value.clone()}</p>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <h4 class="text-lg font-semibold text-white mb-4">"Quick Actions"</h4>
                        <div class="flex flex-wrap gap-4">
                            {contact
                                .quick_actions
                                .iter()
                                .map(|action| {
                                    let (target, rel) = link_target(&action.href);
                                    view! {
                                        <a
                                            href=action.href.clone()
                                            target=target
                                            rel=rel
                                            class=format!(
                                                "flex items-center gap-2 px-6 py-3 rounded-lg text-white font-medium hover:opacity-90 transition-all duration-300 {}",
                                                action.color.solid_bg_class(),
                                            )
                                        >
                                            <i class=action.icon.clone() />
                                            {action.label.clone()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal delay_ms=200>
                        <ContactForm />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());
    let (status, set_status) = signal(None::<Result<(), SubmitError>>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut current = draft.get_untracked();
        let res = submit_draft(&LogSubmitter, &mut current);
        if res.is_ok() {
            draft.set(current);
        }
        set_status.set(Some(res));
    };

    view! {
        <form
            on:submit=on_submit
            class="bg-gray-800/50 backdrop-blur-sm border border-gray-700 rounded-2xl p-8 space-y-6"
        >
            <h3 class="text-2xl font-bold text-white">"Send a Message"</h3>
            {ContactField::ALL
                .into_iter()
                .map(|field| view! { <FormField field draft set_status /> })
                .collect_view()}
            <button
                type="submit"
                class="w-full flex items-center justify-center gap-2 px-6 py-4 bg-gradient-to-r from-blue-500 to-purple-600 text-white rounded-lg font-semibold hover:from-blue-600 hover:to-purple-700 hover:scale-[1.02] transition-all duration-300"
            >
                <i class="extra-send" />
                "Send Message"
            </button>
            {move || {
                status
                    .get()
                    .map(|res| match res {
                        Ok(()) => {
                            Either::Left(
                                view! {
                                    <p class="text-green-400 text-sm">
                                        "Thanks! Your message is on its way."
                                    </p>
                                },
                            )
                        }
                        Err(e) => {
                            Either::Right(
                                view! { <p class="text-red-400 text-sm">{e.to_string()}</p> },
                            )
                        }
                    })
            }}
        </form>
    }
}

#[component]
fn FormField(
    field: ContactField,
    draft: RwSignal<ContactDraft>,
    set_status: WriteSignal<Option<Result<(), SubmitError>>>,
) -> impl IntoView {
    let value = move || draft.with(|d| d.get(field).to_string());
    let on_input = move |ev: web_sys::Event| {
        draft.update(|d| d.set(field, event_target_value(&ev)));
        set_status.set(None);
    };
    let class = "w-full px-4 py-3 bg-gray-900/50 border border-gray-600 rounded-lg text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-300";

    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium text-gray-300 mb-2">
                {field.label()}
            </label>
            {if field == ContactField::Message {
                Either::Left(
                    view! {
                        <textarea
                            id=field.name()
                            name=field.name()
                            prop:value=value
                            on:input=on_input
                            placeholder=field.placeholder()
                            rows=5
                            required=true
                            class=format!("{class} resize-none")
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            type=field.input_type()
                            id=field.name()
                            name=field.name()
                            prop:value=value
                            on:input=on_input
                            placeholder=field.placeholder()
                            required=true
                            class=class
                        />
                    },
                )
            }}
        </div>
    }
}
