use leptos::{prelude::*, reactive::owner::Owner, web_sys};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::sections::{
    ActiveSectionTracker, ActiveStore, SectionEnvironment, TriggerBand, VisibilityCallback, Watch,
};

/// Active section held in a reactive signal so the nav re-renders on change.
#[derive(Clone, Copy)]
struct SignalActive(RwSignal<Option<String>>);

impl ActiveStore for SignalActive {
    fn get(&self) -> Option<String> {
        self.0.get_untracked()
    }

    fn set(&self, id: Option<String>) {
        if self.0.get_untracked() != id {
            self.0.set(id);
        }
    }
}

/// The live document, observed through intersection observers.
struct DocumentSections;

/// One observer and the reactive scope its hook was created in.
struct ObserverWatch {
    owner: Owner,
    stop: Box<dyn Fn()>,
}

impl ObserverWatch {
    /// Runs `start` under a fresh owner so stopping frees everything the hook
    /// allocated, not just the observer.
    fn scoped(start: impl FnOnce() -> Option<Box<dyn Fn()>>) -> Option<Self> {
        let owner = Owner::new();
        match owner.with(start) {
            Some(stop) => Some(Self { owner, stop }),
            None => {
                owner.cleanup();
                None
            }
        }
    }
}

impl Watch for ObserverWatch {
    fn stop(&self) {
        (self.stop)();
        self.owner.cleanup();
    }
}

impl SectionEnvironment for DocumentSections {
    type Watch = ObserverWatch;

    fn observe(
        &self,
        id: &str,
        band: &TriggerBand,
        on_change: VisibilityCallback,
    ) -> Option<ObserverWatch> {
        let el = document().get_element_by_id(id)?;
        let root_margin = band.root_margin();
        ObserverWatch::scoped(move || {
            let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
                el,
                move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
                    for entry in entries {
                        on_change(entry.is_intersecting());
                    }
                },
                UseIntersectionObserverOptions::default()
                    .root_margin(root_margin)
                    .thresholds(vec![0.0]),
            );
            Some(Box::new(stop) as Box<dyn Fn()>)
        })
    }
}

/// Tracks which of `ids` was most recently scrolled into the band starting
/// `offset` px below the top of the viewport.
///
/// Observers are only created in the browser; on the server the returned
/// signal stays `None`.
pub fn use_active_section(
    ids: Signal<Vec<String>>,
    offset: Signal<f64>,
) -> Signal<Option<String>> {
    let active = RwSignal::new(None::<String>);
    let tracker = StoredValue::new_local(ActiveSectionTracker::new(
        DocumentSections,
        SignalActive(active),
    ));

    Effect::watch(
        move || (ids.get(), offset.get()),
        move |(ids, offset), _, _| {
            tracker.update_value(|t| t.configure(ids.iter().cloned(), *offset));
            log::debug!("tracking {} sections", tracker.with_value(|t| t.watch_count()));
        },
        true,
    );

    on_cleanup(move || {
        tracker.try_update_value(|t| t.dispose());
    });

    active.into()
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn test_stop_frees_observer_scope() {
        let root = Owner::new();
        root.set();

        let stopped = Rc::new(Cell::new(false));
        let mut state = None;
        let watch = ObserverWatch::scoped(|| {
            state = Some(RwSignal::new(0));
            let stopped = Rc::clone(&stopped);
            Some(Box::new(move || stopped.set(true)) as Box<dyn Fn()>)
        })
        .unwrap();
        let state = state.unwrap();
        assert_eq!(state.try_get_untracked(), Some(0));

        watch.stop();
        assert!(stopped.get());
        assert_eq!(state.try_get_untracked(), None);
    }

    #[test]
    fn test_missing_region_leaves_nothing_behind() {
        let root = Owner::new();
        root.set();

        let mut state = None;
        let watch = ObserverWatch::scoped(|| {
            state = Some(RwSignal::new(0));
            None
        });
        assert!(watch.is_none());
        assert_eq!(state.unwrap().try_get_untracked(), None);
    }
}
