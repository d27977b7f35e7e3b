// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bindings to the parts of Leaflet's `L.Map` the controller needs.

use js_sys::{Array, Object, Reflect};
use kamchatka_view::{LatLng, MapView, ViewOptions};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    /// A live Leaflet map (`L.Map`).
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    #[derive(Clone, Debug)]
    pub type LeafletMap;

    /// Current zoom level.
    #[wasm_bindgen(method, js_name = getZoom)]
    pub fn get_zoom(this: &LeafletMap) -> f64;

    /// Current map center.
    #[wasm_bindgen(method, js_name = getCenter)]
    pub fn get_center(this: &LeafletMap) -> LeafletLatLng;

    /// Moves the map to `center` (`[lat, lng]`) at `zoom`.
    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64, options: &JsValue);

    /// Zooms in by the map's zoom delta.
    #[wasm_bindgen(method, js_name = zoomIn)]
    pub fn zoom_in(this: &LeafletMap);

    /// Zooms out by the map's zoom delta.
    #[wasm_bindgen(method, js_name = zoomOut)]
    pub fn zoom_out(this: &LeafletMap);

    /// The element the map is rendered into.
    #[wasm_bindgen(method, js_name = getContainer)]
    pub fn get_container(this: &LeafletMap) -> HtmlElement;

    /// Leaflet's `L.LatLng`.
    #[wasm_bindgen(js_namespace = L, js_name = LatLng)]
    #[derive(Clone, Debug)]
    pub type LeafletLatLng;

    /// Latitude in degrees.
    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LeafletLatLng) -> f64;

    /// Longitude in degrees.
    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LeafletLatLng) -> f64;
}

/// [`MapView`] over a live [`LeafletMap`].
#[derive(Clone, Debug)]
pub struct LeafletView {
    map: LeafletMap,
}

impl LeafletView {
    /// Wraps `map`.
    #[must_use]
    pub fn new(map: LeafletMap) -> Self {
        Self { map }
    }

    /// The wrapped map.
    #[must_use]
    pub fn map(&self) -> &LeafletMap {
        &self.map
    }
}

impl MapView for LeafletView {
    fn zoom(&self) -> f64 {
        self.map.get_zoom()
    }

    fn center(&self) -> LatLng {
        let center = self.map.get_center();
        LatLng::new(center.lat(), center.lng())
    }

    fn set_view(&mut self, center: LatLng, zoom: f64, options: ViewOptions) {
        let center = Array::of2(&JsValue::from_f64(center.lat), &JsValue::from_f64(center.lng));
        let options = match options_object(options) {
            Ok(options) => JsValue::from(options),
            Err(err) => {
                log::warn!("could not build setView options: {err:?}");
                JsValue::UNDEFINED
            }
        };
        self.map.set_view(&center, zoom, &options);
    }

    fn zoom_in(&mut self) {
        self.map.zoom_in();
    }

    fn zoom_out(&mut self) {
        self.map.zoom_out();
    }
}

/// Leaflet `ZoomPanOptions` for `options`.
fn options_object(options: ViewOptions) -> Result<Object, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &"animate".into(), &JsValue::from_bool(options.animate))?;
    Reflect::set(&obj, &"duration".into(), &JsValue::from_f64(options.duration))?;
    Reflect::set(
        &obj,
        &"easeLinearity".into(),
        &JsValue::from_f64(options.ease_linearity),
    )?;
    Reflect::set(
        &obj,
        &"noMoveStart".into(),
        &JsValue::from_bool(options.no_move_start),
    )?;
    Ok(obj)
}
