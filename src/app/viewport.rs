use leptos::prelude::{document, window};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::scroll::{self, SectionBounds, Viewport};

/// The live browser window.
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_offset(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
        let el = document().get_element_by_id(id)?;
        let rect = el.get_bounding_client_rect();
        Some(SectionBounds::new(rect.top(), rect.bottom()))
    }

    fn scroll_to(&self, offset: f64) {
        smooth_scroll_to(offset);
    }
}

pub fn smooth_scroll_to(offset: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(offset);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Scroll below the header to `section_id`, warning if it isn't on the page.
pub fn scroll_to_section(section_id: &str) {
    scroll::scroll_or_warn(&BrowserViewport, section_id);
}
