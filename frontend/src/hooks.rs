use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, Window,
};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SLIDESHOW_TRIGGER;
use crate::controllers::scheduler::BrowserScheduler;
use crate::controllers::scroll::{RevealFallback, ScrollTabController};
use crate::controllers::slideshow::{Direction, SlideshowController, Slides};
use crate::controllers::visibility::{IntersectionSample, Rect, TriggerConfig, VisibilityGate};

/// Whether the element behind `node_ref` is in view according to `config`.
/// Stays false if the element never attaches.
#[hook]
pub fn use_visibility(node_ref: NodeRef, config: TriggerConfig) -> bool {
    let visible = use_state(|| false);

    {
        let setter = visible.setter();
        use_effect_with_deps(
            move |node_ref: &NodeRef| {
                let teardown: Box<dyn FnOnce()> = match node_ref.cast::<Element>() {
                    Some(element) => {
                        let gate = Rc::new(RefCell::new(VisibilityGate::new(config)));
                        let on_change = Rc::new(move |v: bool| setter.set(v));
                        observe_intersections(element, gate, on_change)
                    }
                    None => {
                        debug!("Visibility target not attached, staying hidden");
                        Box::new(|| ())
                    }
                };
                move || teardown()
            },
            node_ref,
        );
    }

    *visible
}

fn observe_intersections(
    element: Element,
    gate: Rc<RefCell<VisibilityGate>>,
    on_change: Rc<dyn Fn(bool)>,
) -> Box<dyn FnOnce()> {
    let observer_slot: Rc<RefCell<Option<IntersectionObserver>>> = Rc::new(RefCell::new(None));

    let callback = {
        let gate = gate.clone();
        let on_change = on_change.clone();
        let observer_slot = observer_slot.clone();
        Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let mut gate = gate.borrow_mut();
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let sample = IntersectionSample {
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                };
                if gate.observe(sample) {
                    on_change(gate.is_visible());
                }
            }
            if !gate.wants_observation() {
                if let Some(observer) = observer_slot.borrow_mut().take() {
                    observer.disconnect();
                    debug!("Visibility latched, observer disconnected");
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
    };

    let config = gate.borrow().config();
    let init = IntersectionObserverInit::new();
    init.set_root_margin(&config.root_margin_css());
    init.set_threshold(&JsValue::from_f64(config.threshold));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init);
    match observer {
        Ok(observer) => {
            observer.observe(&element);
            *observer_slot.borrow_mut() = Some(observer);
            Box::new(move || {
                if let Some(observer) = observer_slot.borrow_mut().take() {
                    observer.disconnect();
                }
                gate.borrow_mut().disconnect();
                drop(callback);
            })
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable ({:?}), measuring on scroll instead", err);
            observe_on_scroll(element, gate, on_change)
        }
    }
}

fn observe_on_scroll(
    element: Element,
    gate: Rc<RefCell<VisibilityGate>>,
    on_change: Rc<dyn Fn(bool)>,
) -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        error!("No window, visibility fallback disabled");
        return Box::new(|| ());
    };
    // Registered listener, taken out once it has been removed.
    let listener: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));

    let measure = {
        let gate = gate.clone();
        let window = window.clone();
        let listener = listener.clone();
        move || {
            let mut gate = gate.borrow_mut();
            if gate.wants_observation() {
                let bounds = element.get_bounding_client_rect();
                let target = Rect::new(bounds.x(), bounds.y(), bounds.width(), bounds.height());
                let viewport = Rect::new(
                    0.0,
                    0.0,
                    window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                    window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                );
                if gate.observe_rects(target, viewport) {
                    on_change(gate.is_visible());
                }
            }
            if !gate.wants_observation() {
                if let Some(function) = listener.borrow_mut().take() {
                    remove_scroll_listener(&window, &function);
                    debug!("Visibility latched, scroll listener removed");
                }
            }
        }
    };
    let measure = Rc::new(measure);

    let callback = {
        let measure = measure.clone();
        Closure::wrap(Box::new(move || measure()) as Box<dyn Fn()>)
    };
    let function: js_sys::Function = callback.as_ref().unchecked_ref::<js_sys::Function>().clone();
    match window.add_event_listener_with_callback("scroll", &function) {
        Ok(()) => *listener.borrow_mut() = Some(function),
        Err(err) => error!("Failed to listen for scroll events: {:?}", err),
    }

    // Initial measurement
    measure();

    Box::new(move || {
        gate.borrow_mut().disconnect();
        if let Some(function) = listener.borrow_mut().take() {
            remove_scroll_listener(&window, &function);
        }
        drop(callback);
    })
}

fn remove_scroll_listener(window: &Window, function: &js_sys::Function) {
    if let Err(err) = window.remove_event_listener_with_callback("scroll", function) {
        error!("Failed to remove scroll listener: {:?}", err);
    }
}

pub struct UseSlideshowHandle {
    pub current_index: usize,
    pub jump_to: Callback<usize>,
    pub advance: Callback<Direction>,
}

/// Runs a slideshow that arms the first time `node_ref` scrolls into view.
#[hook]
pub fn use_slideshow(slides: Slides, node_ref: NodeRef) -> UseSlideshowHandle {
    let current_index = use_state(|| 0usize);
    let controller = {
        let setter = current_index.setter();
        use_mut_ref(move || SlideshowController::new(&slides, BrowserScheduler, move |i| setter.set(i)))
    };
    let visible = use_visibility(node_ref, SLIDESHOW_TRIGGER);

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                controller.borrow_mut().on_visibility(*visible);
                || ()
            },
            visible,
        );
    }

    {
        let controller = controller.clone();
        use_unmount(move || {
            controller.borrow_mut().teardown();
        });
    }

    let jump_to = {
        let controller = controller.clone();
        Callback::from(move |index: usize| controller.borrow().jump_to(index))
    };
    let advance = Callback::from(move |direction: Direction| controller.borrow().advance(direction));

    UseSlideshowHandle {
        current_index: *current_index,
        jump_to,
        advance,
    }
}

pub struct UseScrollSignals {
    pub tab_visible: bool,
    pub revealed: bool,
}

/// Scroll-derived page state, recomputed on every scroll and resize.
#[hook]
pub fn use_scroll_signals() -> UseScrollSignals {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let tab = use_mut_ref(ScrollTabController::default);
    let reveal = use_mut_ref(RevealFallback::default);

    tab.borrow_mut().on_scroll(scroll_y, viewport_height);
    reveal.borrow_mut().on_scroll(scroll_y, viewport_height);
    let tab_visible = tab.borrow().is_visible();
    let revealed = reveal.borrow().revealed();

    UseScrollSignals { tab_visible, revealed }
}

/// Smooth-scrolls to the element with `section_id`. A missing section is a no-op.
pub fn scroll_to_section(section_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section_id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("Section #{} not found, not scrolling", section_id),
    }
}
