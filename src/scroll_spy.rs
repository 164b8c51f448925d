//! Scroll-spy bookkeeping: which section is "currently viewed" for a given
//! scroll position, plus smooth navigation to a section.
//!
//! The logic is kept free of DOM types so it runs the same way against the
//! browser adapters in `frontend` and against the fakes in the tests below.

/// Distance below the top of the viewport used as the probe point.
pub const SCROLL_SPY_OFFSET_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: `[top, top + height)`.
    pub fn contains(self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Vertical placement of sections on the page, looked up by DOM id.
pub trait SectionLayout {
    fn section_extent(&self, id: &str) -> Option<SectionExtent>;
}

impl<F> SectionLayout for F
where
    F: Fn(&str) -> Option<SectionExtent>,
{
    fn section_extent(&self, id: &str) -> Option<SectionExtent> {
        self(id)
    }
}

/// First section, in the given order, containing `scroll_y + SCROLL_SPY_OFFSET_PX`.
/// Sections the layout does not know are skipped.
pub fn section_at<'a, L>(sections: &[&'a str], layout: &L, scroll_y: f64) -> Option<&'a str>
where
    L: SectionLayout + ?Sized,
{
    let probe = scroll_y + SCROLL_SPY_OFFSET_PX;

    sections.iter().copied().find(|id| {
        layout
            .section_extent(id)
            .is_some_and(|extent| extent.contains(probe))
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpy {
    sections: Vec<&'static str>,
    active: &'static str,
}

impl ScrollSpy {
    /// Starts on the first section.
    pub fn new(sections: Vec<&'static str>) -> Self {
        let active = sections.first().copied().unwrap_or_default();
        Self { sections, active }
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    /// Recomputes the active section. Returns the new id only when it changed;
    /// a position outside every section keeps the previous one.
    pub fn observe<L>(&mut self, layout: &L, scroll_y: f64) -> Option<&'static str>
    where
        L: SectionLayout + ?Sized,
    {
        let found = section_at(&self.sections, layout, scroll_y)?;
        if found == self.active {
            return None;
        }

        self.active = found;
        Some(found)
    }
}

/// A source of scroll notifications. Dropping the returned listener must
/// unregister the handler.
pub trait ScrollEvents {
    type Listener;

    fn listen(&self, on_scroll: Box<dyn FnMut(f64)>) -> Self::Listener;
}

/// Feeds every scroll event from `events` through `spy` and reports changes
/// of the active section to `on_change`. The subscription lives as long as
/// the returned listener.
pub fn watch<E, L, F>(events: &E, layout: L, mut spy: ScrollSpy, on_change: F) -> E::Listener
where
    E: ScrollEvents,
    L: SectionLayout + 'static,
    F: Fn(&'static str) + 'static,
{
    events.listen(Box::new(move |scroll_y| {
        if let Some(active) = spy.observe(&layout, scroll_y) {
            on_change(active);
        }
    }))
}

/// Element lookup and smooth scrolling for in-page navigation.
pub trait SectionTargets {
    type Target;

    fn find_section(&self, id: &str) -> Option<Self::Target>;

    fn smooth_scroll(&self, target: &Self::Target);
}

/// Scrolls the section with `id` into view. A missing section is ignored and
/// reported as `false`.
pub fn scroll_to_section<T>(targets: &T, id: &str) -> bool
where
    T: SectionTargets + ?Sized,
{
    let Some(target) = targets.find_section(id) else {
        return false;
    };

    targets.smooth_scroll(&target);
    true
}
