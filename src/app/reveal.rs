use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::progress::Latch;

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let is_visible = use_element_visibility(el);
    let latch = StoredValue::new(Latch::new());
    let (shown, set_shown) = signal(false);

    Effect::new(move |_| {
        if !is_visible.get() {
            return;
        }
        let mut fired = false;
        latch.update_value(|l| fired = l.fire());
        if fired {
            set_shown.set(true);
        }
    });

    view! {
        <div
            node_ref=el
            class=move || {
                let state = if shown.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-12"
                };
                format!("transition-all duration-700 ease-out {state} {class}")
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
