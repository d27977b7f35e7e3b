// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser event wiring for [`PanController`].

use alloc::rc::{Rc, Weak};
use alloc::string::ToString;
use core::cell::{Cell, RefCell};

use kamchatka_pan::{EventOrigin, Legend, PanConfig, PanController};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, Window};

use crate::dom::dom_key;
use crate::leaflet::{LeafletMap, LeafletView};

/// CSS class of the legend element appended to the map container.
pub const LEGEND_CLASS: &str = "keyboard-legend";

/// State shared between the event closures.
struct Shared {
    controller: RefCell<PanController<LeafletView>>,
    window: Window,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pending_frame: Cell<Option<i32>>,
}

impl Shared {
    /// Schedules the next pan frame unless one is already pending.
    fn request_frame(&self) {
        if self.pending_frame.get().is_some() {
            return;
        }
        let frame = self.frame.borrow();
        let Some(callback) = frame.as_ref() else {
            return;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.pending_frame.set(Some(id)),
            Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
        }
    }

    fn on_frame(&self, now_ms: f64) {
        self.pending_frame.set(None);
        let outcome = self.controller.borrow_mut().step(now_ms);
        if outcome.is_continue() {
            self.request_frame();
        }
    }
}

/// Registered listeners and the legend element, kept until teardown.
struct Installed {
    document: Document,
    key_down: Closure<dyn FnMut(KeyboardEvent)>,
    key_up: Closure<dyn FnMut(KeyboardEvent)>,
    blur: Closure<dyn FnMut(Event)>,
    legend: Element,
}

/// Keyboard panning attached to a Leaflet map.
///
/// Listens for `keydown`/`keyup` on the document and `blur` on the window,
/// drives the pan loop from `requestAnimationFrame`, and shows the key
/// legend inside the map container. Dropping the panner disposes it.
#[wasm_bindgen]
pub struct KeyboardPanner {
    shared: Rc<Shared>,
    installed: Option<Installed>,
}

impl KeyboardPanner {
    /// Attaches keyboard panning with `config` to `map`.
    pub fn install(map: LeafletMap, config: PanConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let controller = PanController::new(LeafletView::new(map.clone()), config)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let legend = legend_element(&document, &controller.legend())?;

        let shared = Rc::new(Shared {
            controller: RefCell::new(controller),
            window,
            frame: RefCell::new(None),
            pending_frame: Cell::new(None),
        });
        let weak = Rc::downgrade(&shared);
        *shared.frame.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
            if let Some(shared) = weak.upgrade() {
                shared.on_frame(now_ms);
            }
        }));

        let key_down = key_listener(Rc::downgrade(&shared), true);
        let key_up = key_listener(Rc::downgrade(&shared), false);
        let weak = Rc::downgrade(&shared);
        let blur = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            if let Some(shared) = weak.upgrade() {
                let _ = shared.controller.borrow_mut().release_all();
            }
        });

        let doc_target: &EventTarget = document.as_ref();
        doc_target.add_event_listener_with_callback("keydown", key_down.as_ref().unchecked_ref())?;
        doc_target.add_event_listener_with_callback("keyup", key_up.as_ref().unchecked_ref())?;
        let win_target: &EventTarget = shared.window.as_ref();
        win_target.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref())?;
        map.get_container().append_child(&legend)?;

        log::debug!("keyboard panning installed");
        Ok(Self {
            shared,
            installed: Some(Installed {
                document,
                key_down,
                key_up,
                blur,
                legend,
            }),
        })
    }

    /// Returns `true` once [`KeyboardPanner::dispose`] has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.installed.is_none()
    }
}

#[wasm_bindgen]
impl KeyboardPanner {
    /// Attaches keyboard panning with the default tuning to `map`.
    #[wasm_bindgen(js_name = install)]
    pub fn install_default(map: LeafletMap) -> Result<Self, JsValue> {
        Self::install(map, PanConfig::default())
    }

    /// Removes listeners and the legend, cancels a pending frame and disposes
    /// the controller. Calling it again does nothing.
    pub fn dispose(&mut self) {
        let Some(installed) = self.installed.take() else {
            return;
        };
        let doc_target: &EventTarget = installed.document.as_ref();
        remove_listener(doc_target, "keydown", installed.key_down.as_ref());
        remove_listener(doc_target, "keyup", installed.key_up.as_ref());
        let win_target: &EventTarget = self.shared.window.as_ref();
        remove_listener(win_target, "blur", installed.blur.as_ref());
        installed.legend.remove();

        if let Some(id) = self.shared.pending_frame.take()
            && let Err(err) = self.shared.window.cancel_animation_frame(id)
        {
            log::warn!("cancelAnimationFrame failed: {err:?}");
        }
        self.shared.frame.borrow_mut().take();
        self.shared.controller.borrow_mut().dispose();
        log::debug!("keyboard panning removed");
    }
}

impl Drop for KeyboardPanner {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl core::fmt::Debug for KeyboardPanner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyboardPanner")
            .field("disposed", &self.is_disposed())
            .field("pending_frame", &self.shared.pending_frame.get())
            .finish_non_exhaustive()
    }
}

fn key_listener(weak: Weak<Shared>, pressed: bool) -> Closure<dyn FnMut(KeyboardEvent)> {
    Closure::new(move |event: KeyboardEvent| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let key = dom_key(&event.key());
        let origin = event_origin(&event);
        let response = {
            let mut controller = shared.controller.borrow_mut();
            if pressed {
                controller.handle_key_down(&key, origin)
            } else {
                controller.handle_key_up(&key, origin)
            }
        };
        if response.needs_frame() {
            shared.request_frame();
        }
    })
}

fn remove_listener(target: &EventTarget, kind: &str, callback: &JsValue) {
    if let Err(err) = target.remove_event_listener_with_callback(kind, callback.unchecked_ref()) {
        log::warn!("removing {kind} listener failed: {err:?}");
    }
}

/// Classifies the event target so typing in search fields is left alone.
fn event_origin(event: &Event) -> EventOrigin {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return EventOrigin::Document;
    };
    let editable = element
        .dyn_ref::<HtmlElement>()
        .is_some_and(HtmlElement::is_content_editable);
    EventOrigin::from_element(&element.tag_name(), editable)
}

fn legend_element(document: &Document, legend: &Legend) -> Result<Element, JsValue> {
    let root = document.create_element("div")?;
    root.set_class_name(LEGEND_CLASS);
    let title = document.create_element("strong")?;
    title.set_text_content(Some(legend.title()));
    root.append_child(&title)?;
    for line in legend.lines() {
        let row = document.create_element("div")?;
        row.set_text_content(Some(&line.to_text()));
        root.append_child(&row)?;
    }
    Ok(root)
}
