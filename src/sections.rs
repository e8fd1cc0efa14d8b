//! Scroll-driven active section tracking.
//!
//! The tracker watches a set of named page regions and reports which one was
//! most recently reached by the reader. It knows nothing about the DOM: the
//! host supplies a [`SectionEnvironment`] that can locate regions and watch
//! them against a [`TriggerBand`], and an [`ActiveStore`] that holds the
//! current value for readers.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// Offset used by the site navigation, roughly the height of the fixed header.
pub const DEFAULT_OFFSET: f64 = 100.0;

/// Vertical slice of the viewport a region must touch to count as reached.
///
/// The band starts `offset` pixels below the top of the viewport and ends at
/// the viewport's vertical midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    offset: f64,
}

impl TriggerBand {
    /// Negative and non-finite offsets collapse to 0.
    pub fn new(offset: f64) -> Self {
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        Self { offset }
    }

    /// Intersection observer root margin describing this band.
    pub fn root_margin(&self) -> String {
        format!("-{}px 0px -50% 0px", self.offset)
    }

    /// Band bounds in viewport coordinates, `(top, bottom)`.
    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        (self.offset, viewport_height / 2.0)
    }

    /// Whether a region spanning `[top, bottom)` in viewport coordinates
    /// touches the band. Matches an observer with threshold 0: any overlap
    /// counts, an empty band never matches.
    pub fn intersects(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let (band_top, band_bottom) = self.bounds(viewport_height);
        if band_bottom <= band_top {
            return false;
        }
        top < band_bottom && bottom > band_top
    }
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET)
    }
}

/// A live visibility watch. Stopping must be idempotent.
pub trait Watch {
    fn stop(&self);
}

/// Called with `true` when a region enters the band, `false` when it leaves.
pub type VisibilityCallback = Box<dyn Fn(bool)>;

/// The page a tracker observes.
pub trait SectionEnvironment {
    type Watch: Watch;

    /// Starts watching the region named `id` against `band`.
    ///
    /// Returns `None` when no such region exists on the page.
    fn observe(
        &self,
        id: &str,
        band: &TriggerBand,
        on_change: VisibilityCallback,
    ) -> Option<Self::Watch>;
}

/// Single-writer slot holding the active section.
pub trait ActiveStore: Clone + 'static {
    fn get(&self) -> Option<String>;
    fn set(&self, id: Option<String>);
}

/// Plain in-memory store, for hosts without a reactive runtime.
#[derive(Debug, Clone, Default)]
pub struct LocalActive(Rc<RefCell<Option<String>>>);

impl ActiveStore for LocalActive {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&self, id: Option<String>) {
        *self.0.borrow_mut() = id;
    }
}

#[derive(Debug, Clone, PartialEq)]
struct TrackerConfig {
    ids: Vec<String>,
    band: TriggerBand,
}

pub struct ActiveSectionTracker<E: SectionEnvironment, S: ActiveStore> {
    env: E,
    store: S,
    config: Option<TrackerConfig>,
    watches: Vec<E::Watch>,
    generation: Rc<Cell<u64>>,
}

impl<E: SectionEnvironment, S: ActiveStore> ActiveSectionTracker<E, S> {
    pub fn new(env: E, store: S) -> Self {
        Self {
            env,
            store,
            config: None,
            watches: Vec::new(),
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn active(&self) -> Option<String> {
        self.store.get()
    }

    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    /// Observes `ids` with a band starting `offset` px below the viewport top.
    ///
    /// A call with the same ids and offset as the current configuration is a
    /// no-op. Any other call disposes every existing watch before registering
    /// the new ones.
    pub fn configure<I, T>(&mut self, ids: I, offset: f64)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let config = TrackerConfig {
            ids: ids.into_iter().map(Into::into).collect(),
            band: TriggerBand::new(offset),
        };
        if self.config.as_ref() == Some(&config) {
            return;
        }

        self.dispose();

        if let Some(current) = self.store.get() {
            if !config.ids.contains(&current) {
                self.store.set(None);
            }
        }

        let generation = self.generation.get();
        for id in &config.ids {
            let on_change = {
                let id = id.clone();
                let store = self.store.clone();
                let live = self.generation.clone();
                Box::new(move |entered: bool| {
                    // last delivered notification wins
                    if entered && live.get() == generation {
                        store.set(Some(id.clone()));
                    }
                })
            };
            match self.env.observe(id, &config.band, on_change) {
                Some(watch) => self.watches.push(watch),
                None => log::debug!("no region for section `{id}`, skipping"),
            }
        }
        self.config = Some(config);
    }

    /// Stops every watch. Notifications already queued by the environment
    /// are ignored from here on.
    pub fn dispose(&mut self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        for watch in self.watches.drain(..) {
            watch.stop();
        }
        self.config = None;
    }
}

impl<E: SectionEnvironment, S: ActiveStore> Drop for ActiveSectionTracker<E, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    struct Entry {
        id: String,
        band: TriggerBand,
        callback: VisibilityCallback,
        inside: Cell<bool>,
        stopped: Rc<Cell<bool>>,
    }

    /// A page of stacked regions and a scroll position.
    #[derive(Default)]
    struct FakePage {
        regions: Vec<(String, f64, f64)>,
        scroll: Cell<f64>,
        entries: RefCell<Vec<Entry>>,
        deliveries: Cell<usize>,
    }

    impl FakePage {
        fn stacked(ids: &[&str], height: f64) -> Rc<Self> {
            let regions = ids
                .iter()
                .enumerate()
                .map(|(i, id)| (id.to_string(), i as f64 * height, height))
                .collect();
            Rc::new(Self {
                regions,
                ..Default::default()
            })
        }

        fn live_watches(&self) -> usize {
            self.entries
                .borrow()
                .iter()
                .filter(|e| !e.stopped.get())
                .count()
        }

        fn hits(&self, id: &str, band: &TriggerBand) -> bool {
            let scroll = self.scroll.get();
            self.regions
                .iter()
                .find(|(r, _, _)| r == id)
                .map(|(_, top, height)| {
                    band.intersects(top - scroll, top - scroll + height, VIEWPORT)
                })
                .unwrap_or(false)
        }

        /// Scrolls and delivers a notification for every live watch whose
        /// state changed, in registration order.
        fn scroll_to(&self, y: f64) {
            self.scroll.set(y);
            for entry in self.entries.borrow().iter() {
                if entry.stopped.get() {
                    continue;
                }
                let now = self.hits(&entry.id, &entry.band);
                if now != entry.inside.get() {
                    entry.inside.set(now);
                    self.deliveries.set(self.deliveries.get() + 1);
                    (entry.callback)(now);
                }
            }
        }

        /// Fires every registered callback, stopped or not, as a host
        /// delivering late notifications would.
        fn fire_all(&self) {
            for entry in self.entries.borrow().iter() {
                (entry.callback)(true);
            }
        }

        fn fire_stopped(&self) {
            for entry in self.entries.borrow().iter().filter(|e| e.stopped.get()) {
                (entry.callback)(true);
            }
        }
    }

    struct FakeWatch(Rc<Cell<bool>>);

    impl Watch for FakeWatch {
        fn stop(&self) {
            self.0.set(true);
        }
    }

    impl SectionEnvironment for Rc<FakePage> {
        type Watch = FakeWatch;

        fn observe(
            &self,
            id: &str,
            band: &TriggerBand,
            on_change: VisibilityCallback,
        ) -> Option<FakeWatch> {
            if !self.regions.iter().any(|(r, _, _)| r == id) {
                return None;
            }
            let stopped = Rc::new(Cell::new(false));
            // observers report the initial state right away
            let inside = self.hits(id, band);
            if inside {
                on_change(true);
            }
            self.entries.borrow_mut().push(Entry {
                id: id.to_string(),
                band: *band,
                callback: on_change,
                inside: Cell::new(inside),
                stopped: stopped.clone(),
            });
            Some(FakeWatch(stopped))
        }
    }

    fn tracker(page: &Rc<FakePage>) -> ActiveSectionTracker<Rc<FakePage>, LocalActive> {
        ActiveSectionTracker::new(page.clone(), LocalActive::default())
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(TriggerBand::new(120.0).root_margin(), "-120px 0px -50% 0px");
        assert_eq!(TriggerBand::new(-5.0).root_margin(), "-0px 0px -50% 0px");
    }

    #[test]
    fn test_non_finite_offset_is_zero() {
        for offset in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let band = TriggerBand::new(offset);
            assert_eq!(band, TriggerBand::new(0.0));
            assert_eq!(band.root_margin(), "-0px 0px -50% 0px");
        }
    }

    #[test]
    fn test_band_intersection() {
        let band = TriggerBand::new(100.0);
        assert!(band.intersects(0.0, 150.0, VIEWPORT));
        assert!(band.intersects(350.0, 900.0, VIEWPORT));
        assert!(!band.intersects(0.0, 100.0, VIEWPORT));
        assert!(!band.intersects(400.0, 900.0, VIEWPORT));
        // offset past the midpoint leaves no band at all
        assert!(!TriggerBand::new(500.0).intersects(0.0, 800.0, VIEWPORT));
    }

    #[test]
    fn test_missing_regions_stay_none() {
        let page = FakePage::stacked(&["home"], 800.0);
        let mut t = tracker(&page);
        t.configure(["nope", "also-missing"], 100.0);
        assert_eq!(t.watch_count(), 0);
        for y in [0.0, 400.0, 1600.0, 0.0] {
            page.scroll_to(y);
            assert_eq!(t.active(), None);
        }
    }

    #[test]
    fn test_single_region_stays_active() {
        let page = FakePage::stacked(&["spacer", "about"], 1000.0);
        let mut t = tracker(&page);
        t.configure(["about"], 100.0);
        assert_eq!(t.active(), None);

        page.scroll_to(700.0);
        assert_eq!(t.active().as_deref(), Some("about"));

        // leaving the band does not clear the value
        page.scroll_to(0.0);
        assert_eq!(t.active().as_deref(), Some("about"));
    }

    #[test]
    fn test_scrolling_down_activates_next_section() {
        let page = FakePage::stacked(&["home", "about", "skills"], 900.0);
        let mut t = tracker(&page);
        t.configure(["home", "about", "skills"], 120.0);
        assert_eq!(t.active().as_deref(), Some("home"));

        // home spans [-850, 50) and has left the band, about spans [50, 950)
        page.scroll_to(850.0);
        assert_eq!(t.active().as_deref(), Some("about"));

        page.scroll_to(1800.0);
        assert_eq!(t.active().as_deref(), Some("skills"));
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let page = FakePage::stacked(&["home", "about"], 900.0);
        let mut t = tracker(&page);
        t.configure(["home", "ghost", "about"], 100.0);
        assert_eq!(t.watch_count(), 2);
        page.scroll_to(900.0);
        assert_eq!(t.active().as_deref(), Some("about"));
    }

    #[test]
    fn test_offset_change_recomputes() {
        let page = FakePage::stacked(&["home", "about"], 500.0);
        let mut t = tracker(&page);
        page.scroll_to(350.0);
        // home spans [-350, 150) and about [150, 650): both touch a band
        // starting at 100, home reports last
        t.configure(["about", "home"], 100.0);
        assert_eq!(t.active().as_deref(), Some("home"));
        assert_eq!(page.live_watches(), 2);

        // a band starting at 200 no longer reaches home
        t.configure(["about", "home"], 200.0);
        assert_eq!(t.watch_count(), 2);
        assert_eq!(page.live_watches(), 2);
        assert_eq!(t.active().as_deref(), Some("about"));
    }

    #[test]
    fn test_identical_config_does_not_leak() {
        let page = FakePage::stacked(&["home", "about", "skills"], 900.0);
        let mut t = tracker(&page);
        t.configure(["home", "about", "skills"], 120.0);
        let once = page.live_watches();
        for _ in 0..10 {
            t.configure(["home", "about", "skills"], 120.0);
        }
        assert_eq!(page.live_watches(), once);
        assert_eq!(t.watch_count(), once);
        assert_eq!(page.entries.borrow().len(), once);
    }

    #[test]
    fn test_reconfigure_drops_stale_active() {
        let page = FakePage::stacked(&["home", "about", "skills"], 900.0);
        let mut t = tracker(&page);
        t.configure(["home", "about"], 100.0);
        assert_eq!(t.active().as_deref(), Some("home"));

        page.scroll_to(2000.0);
        t.configure(["skills"], 100.0);
        assert_eq!(t.active().as_deref(), Some("skills"));

        t.configure(["about"], 100.0);
        assert_eq!(t.active(), None);
        assert_eq!(page.live_watches(), 1);
    }

    #[test]
    fn test_stale_watches_cannot_fire() {
        let page = FakePage::stacked(&["home", "about"], 900.0);
        let mut t = tracker(&page);
        t.configure(["home", "about"], 100.0);
        t.configure(["home"], 100.0);
        assert_eq!(t.active().as_deref(), Some("home"));

        page.fire_stopped();
        assert_eq!(t.active().as_deref(), Some("home"));
    }

    #[test]
    fn test_teardown_disposes_everything() {
        let page = FakePage::stacked(&["home", "about", "skills"], 900.0);
        let store = LocalActive::default();
        {
            let mut t = ActiveSectionTracker::new(page.clone(), store.clone());
            t.configure(["home", "about", "skills"], 100.0);
            assert_eq!(page.live_watches(), 3);
        }
        assert_eq!(page.live_watches(), 0);
        assert_eq!(store.get().as_deref(), Some("home"));

        let before = page.deliveries.get();
        page.scroll_to(1800.0);
        assert_eq!(page.deliveries.get(), before);
        page.fire_all();
        assert_eq!(store.get().as_deref(), Some("home"));
    }
}
