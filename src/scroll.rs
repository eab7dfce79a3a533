use thiserror::Error;

/// Scroll offset past which the header switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;
/// Reference line, measured from the viewport top, that marks a section as active.
pub const ACTIVE_LINE: f64 = 100.0;
/// Height of the fixed header; navigation leaves this much room above a section.
pub const HEADER_HEIGHT: f64 = 64.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Element with ID \"{0}\" not found")]
    TargetNotFound(String),
}

/// Bounding box of a section relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn crosses(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// What the tracker needs from the page it is scrolling.
///
/// The browser implementation lives with the components; tests use an
/// in-memory page.
pub trait Viewport {
    /// Current vertical scroll offset of the document.
    fn scroll_offset(&self) -> f64;
    /// Viewport-relative bounds of the element with `id`, if it is on the page.
    fn section_bounds(&self, id: &str) -> Option<SectionBounds>;
    /// Request a smooth scroll to the absolute document offset.
    fn scroll_to(&self, offset: f64);
}

pub fn is_past_threshold(scroll_offset: f64) -> bool {
    scroll_offset > SCROLL_THRESHOLD
}

/// First section, in declared order, whose box crosses the active line.
/// Sections without bounds (not on the page) are skipped.
pub fn find_active_section<'a, I>(sections: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, Option<SectionBounds>)>,
{
    sections.into_iter().find_map(|(id, bounds)| match bounds {
        Some(b) if b.crosses(ACTIVE_LINE) => Some(id),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub scroll_offset: f64,
    pub is_past_threshold: bool,
    pub active_section_id: String,
}

impl ScrollState {
    pub fn new(default_section_id: impl Into<String>) -> Self {
        Self {
            scroll_offset: 0.0,
            is_past_threshold: false,
            active_section_id: default_section_id.into(),
        }
    }

    /// Apply one scroll update. With no matching section the previously
    /// active id is kept.
    pub fn update<'a, I>(&mut self, scroll_offset: f64, sections: I)
    where
        I: IntoIterator<Item = (&'a str, Option<SectionBounds>)>,
    {
        self.scroll_offset = scroll_offset;
        self.is_past_threshold = is_past_threshold(scroll_offset);
        if let Some(id) = find_active_section(sections) {
            if self.active_section_id != id {
                self.active_section_id = id.to_string();
            }
        }
    }

    /// Read the scroll offset and section bounds from `viewport`.
    pub fn observe<'a, V, I>(&mut self, viewport: &V, section_ids: I)
    where
        V: Viewport + ?Sized,
        I: IntoIterator<Item = &'a str>,
    {
        let offset = viewport.scroll_offset();
        self.update(
            offset,
            section_ids
                .into_iter()
                .map(|id| (id, viewport.section_bounds(id))),
        );
    }
}

/// Document offset that puts a section just below the fixed header.
pub fn scroll_target(section_top: f64, page_offset: f64) -> f64 {
    section_top + page_offset - HEADER_HEIGHT
}

/// Smooth-scroll `viewport` to `section_id`. Returns the requested offset.
pub fn navigate<V>(viewport: &V, section_id: &str) -> Result<f64, NavigationError>
where
    V: Viewport + ?Sized,
{
    let bounds = viewport
        .section_bounds(section_id)
        .ok_or_else(|| NavigationError::TargetNotFound(section_id.to_string()))?;
    let offset = scroll_target(bounds.top, viewport.scroll_offset());
    viewport.scroll_to(offset);
    Ok(offset)
}

/// Navigate, logging a warning instead of failing when the section is missing.
pub fn scroll_or_warn<V>(viewport: &V, section_id: &str) -> Option<f64>
where
    V: Viewport + ?Sized,
{
    navigate(viewport, section_id)
        .inspect_err(|e| log::warn!("{e}"))
        .ok()
}

/// A navigation link click: scroll to the section and close the menu,
/// whether or not the section exists.
pub fn follow_nav_link<V>(viewport: &V, section_id: &str, menu_open: &mut bool) -> Option<f64>
where
    V: Viewport + ?Sized,
{
    let offset = scroll_or_warn(viewport, section_id);
    *menu_open = false;
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::sync::{Mutex, Once};

    /// Collects warnings so tests can assert on them. Tests run in parallel,
    /// so assertions look for their own message rather than an exact count.
    struct CaptureLogger(Mutex<Vec<String>>);

    impl log::Log for CaptureLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                self.0.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger(Mutex::new(Vec::new()));
    static INIT_LOGGER: Once = Once::new();

    fn captured_warnings() -> &'static CaptureLogger {
        INIT_LOGGER.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(log::LevelFilter::Warn);
        });
        &LOGGER
    }

    fn warned(logger: &CaptureLogger, message: &str) -> bool {
        logger.0.lock().unwrap().iter().any(|m| m == message)
    }

    const SECTIONS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

    /// Page made of stacked sections with document-absolute positions.
    struct FakePage {
        offset: Cell<f64>,
        sections: HashMap<&'static str, (f64, f64)>,
        scrolls: RefCell<Vec<f64>>,
    }

    impl FakePage {
        fn new(layout: &[(&'static str, f64, f64)]) -> Self {
            Self {
                offset: Cell::new(0.0),
                sections: layout.iter().map(|(id, t, b)| (*id, (*t, *b))).collect(),
                scrolls: RefCell::new(Vec::new()),
            }
        }

        fn stacked() -> Self {
            Self::new(&[
                ("home", 0.0, 800.0),
                ("about", 800.0, 1600.0),
                ("skills", 1600.0, 2600.0),
                ("projects", 2600.0, 3400.0),
                ("contact", 3400.0, 4200.0),
            ])
        }
    }

    impl Viewport for FakePage {
        fn scroll_offset(&self) -> f64 {
            self.offset.get()
        }

        fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
            let offset = self.offset.get();
            self.sections
                .get(id)
                .map(|(top, bottom)| SectionBounds::new(top - offset, bottom - offset))
        }

        fn scroll_to(&self, offset: f64) {
            self.scrolls.borrow_mut().push(offset);
            self.offset.set(offset);
        }
    }

    #[test]
    fn test_threshold() {
        for offset in [0.0, 10.0, 49.9, 50.0] {
            assert!(!is_past_threshold(offset), "offset {offset}");
        }
        for offset in [50.1, 51.0, 200.0, 10_000.0] {
            assert!(is_past_threshold(offset), "offset {offset}");
        }
    }

    #[test]
    fn test_threshold_jump_single_update() {
        let mut state = ScrollState::new("home");
        state.update(0.0, []);
        assert!(!state.is_past_threshold);
        state.update(200.0, []);
        assert!(state.is_past_threshold);
        assert_eq!(state.scroll_offset, 200.0);
    }

    #[test]
    fn test_first_match_wins() {
        let sections = [
            ("home", Some(SectionBounds::new(-500.0, 50.0))),
            ("about", Some(SectionBounds::new(20.0, 100.0))),
            ("skills", Some(SectionBounds::new(100.0, 900.0))),
        ];
        // about and skills both touch the line; about is declared first
        assert_eq!(find_active_section(sections), Some("about"));
    }

    #[test]
    fn test_missing_elements_skipped() {
        let sections = [
            ("home", None),
            ("about", None),
            ("skills", Some(SectionBounds::new(0.0, 400.0))),
        ];
        assert_eq!(find_active_section(sections), Some("skills"));
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut state = ScrollState::new("home");
        state.update(900.0, [("about", Some(SectionBounds::new(-100.0, 700.0)))]);
        assert_eq!(state.active_section_id, "about");

        // gap between sections: nothing crosses the line
        state.update(
            1000.0,
            [
                ("about", Some(SectionBounds::new(-900.0, 50.0))),
                ("skills", Some(SectionBounds::new(150.0, 900.0))),
            ],
        );
        assert_eq!(state.active_section_id, "about");
        assert_eq!(state.scroll_offset, 1000.0);
    }

    #[test]
    fn test_defaults_to_first_section() {
        let state = ScrollState::new("home");
        assert_eq!(state.active_section_id, "home");
        assert!(!state.is_past_threshold);
    }

    #[test]
    fn test_observe_stacked_page() {
        let page = FakePage::stacked();
        let mut state = ScrollState::new("home");

        page.offset.set(1700.0);
        state.observe(&page, SECTIONS);
        assert_eq!(state.active_section_id, "skills");
        assert!(state.is_past_threshold);

        page.offset.set(0.0);
        state.observe(&page, SECTIONS);
        assert_eq!(state.active_section_id, "home");
        assert!(!state.is_past_threshold);
    }

    #[test]
    fn test_observe_boundary_prefers_earlier_section() {
        let page = FakePage::stacked();
        let mut state = ScrollState::new("home");
        // about ends and skills starts exactly on the active line
        page.offset.set(1500.0);
        state.observe(&page, SECTIONS);
        assert_eq!(state.active_section_id, "about");
    }

    #[test]
    fn test_navigate_subtracts_header() {
        let page = FakePage::stacked();
        page.offset.set(300.0);
        let offset = navigate(&page, "projects").unwrap();
        assert_eq!(offset, 2600.0 - HEADER_HEIGHT);
        assert_eq!(*page.scrolls.borrow(), vec![2600.0 - HEADER_HEIGHT]);
    }

    #[test]
    fn test_navigate_idempotent() {
        let page = FakePage::stacked();
        let first = navigate(&page, "contact").unwrap();
        let second = navigate(&page, "contact").unwrap();
        assert_eq!(first, second);
        assert_eq!(page.scrolls.borrow().len(), 2);
    }

    #[test]
    fn test_navigate_missing_target() {
        let page = FakePage::stacked();
        let res = navigate(&page, "testimonials");
        assert_eq!(res, Err(NavigationError::TargetNotFound("testimonials".to_string())));
        assert!(page.scrolls.borrow().is_empty());
        assert_eq!(
            res.unwrap_err().to_string(),
            "Element with ID \"testimonials\" not found"
        );
    }

    #[test]
    fn test_nav_link_missing_target_warns_and_closes_menu() {
        let logger = captured_warnings();
        let page = FakePage::stacked();
        page.offset.set(900.0);
        let mut menu_open = true;

        let res = follow_nav_link(&page, "pricing", &mut menu_open);
        assert_eq!(res, None);
        assert!(!menu_open);
        assert!(page.scrolls.borrow().is_empty());
        assert_eq!(page.offset.get(), 900.0);
        assert!(warned(logger, "Element with ID \"pricing\" not found"));
    }

    #[test]
    fn test_nav_link_scrolls_and_closes_menu() {
        let logger = captured_warnings();
        let page = FakePage::stacked();
        let mut menu_open = true;

        let res = follow_nav_link(&page, "skills", &mut menu_open);
        assert_eq!(res, Some(1600.0 - HEADER_HEIGHT));
        assert!(!menu_open);
        assert!(!warned(logger, "Element with ID \"skills\" not found"));

        // already closed menus stay closed
        follow_nav_link(&page, "about", &mut menu_open);
        assert!(!menu_open);
    }
}
