//! Leaflet bindings and the imperative map bridge.
//!
//! Leaflet is loaded as a global script (`L`) by the page shell. The bridge
//! owns the map instance plus the tile, track, and marker layers, and keeps
//! event closures alive until [`LeafletBridge::destroy`].
//!
//! Event handlers registered through [`LeafletBridge::on`] must not borrow
//! the bridge: Leaflet fires `movestart` synchronously from `fitBounds`,
//! while the bridge is mutably borrowed by the caller.

use js_sys::{JSON, Reflect};
use mapview::consts::{POPUP_MAX_WIDTH, TOOLTIP_OFFSET_Y, TOOLTIP_OPACITY, TRACK_COLOR, TRACK_WEIGHT};
use mapview::fitter::{LocateOptions, MapEngine};
use mapview::geo::{GeoBounds, GeoPoint};
use mapview::marker::{MarkerIcon, PopupContent, TooltipContent};
use mapview::overlay::PaddingBox;
use mapview::palette::CategoryColorMap;
use mapview::poi::MapPoi;
use mapview::tiles::TileSource;
use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::util::marker_html::{popup_html, tooltip_html};

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container: &web_sys::HtmlElement, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap) -> LeafletMap;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn locate(this: &LeafletMap, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = on)]
    fn on_event(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;

    #[wasm_bindgen(method, js_name = remove)]
    fn remove_map(this: &LeafletMap) -> LeafletMap;

    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = remove)]
    fn remove_layer(this: &Layer) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L)]
    fn polyline(lat_lngs: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> LayerGroup;

    #[wasm_bindgen(extends = Layer)]
    pub type LayerGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &LayerGroup, layer: &Layer) -> LayerGroup;

    #[wasm_bindgen(js_namespace = L)]
    fn icon(options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = L)]
    fn marker(lat_lng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(extends = Layer)]
    #[derive(Clone)]
    pub type Marker;

    #[wasm_bindgen(method, js_name = bindTooltip)]
    fn bind_tooltip(this: &Marker, content: &str, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = closeTooltip)]
    fn close_tooltip(this: &Marker) -> Marker;

    #[wasm_bindgen(method, js_name = on)]
    fn on_marker_event(this: &Marker, event: &str, handler: &js_sys::Function) -> Marker;
}

type EventHandler = Closure<dyn FnMut(JsValue)>;

/// Convert a JSON literal into a plain JS object.
fn js_value(value: &serde_json::Value) -> JsValue {
    JSON::parse(&value.to_string()).unwrap_or(JsValue::UNDEFINED)
}

fn lat_lng(point: GeoPoint) -> JsValue {
    js_value(&json!(point.lat_lng()))
}

fn icon_options(icon: &MarkerIcon) -> JsValue {
    js_value(&json!({
        "iconUrl": icon.icon_url,
        "shadowUrl": icon.shadow_url,
        "iconSize": icon.icon_size,
        "iconAnchor": icon.icon_anchor,
        "popupAnchor": icon.popup_anchor,
        "shadowSize": icon.shadow_size,
    }))
}

/// Owns one Leaflet map and its layers.
pub struct LeafletBridge {
    map: LeafletMap,
    tiles: Option<Layer>,
    track: Option<Layer>,
    markers: Option<LayerGroup>,
    handlers: Vec<EventHandler>,
    marker_handlers: Vec<EventHandler>,
}

impl LeafletBridge {
    /// Create a map inside `container`, centered on `center`.
    ///
    /// Returns `None` when Leaflet rejects the container (e.g. already
    /// initialized) or is not loaded.
    pub fn mount(container: &web_sys::HtmlElement, center: GeoPoint, zoom: f64) -> Option<Self> {
        let map = match create_map(container, &js_value(&json!({ "zoomControl": true }))) {
            Ok(map) => map,
            Err(err) => {
                log::error!("leaflet map creation failed: {err:?}");
                return None;
            }
        };
        map.set_view(&lat_lng(center), zoom);
        Some(Self { map, tiles: None, track: None, markers: None, handlers: Vec::new(), marker_handlers: Vec::new() })
    }

    /// Subscribe to a map event for the bridge's lifetime.
    pub fn on(&mut self, event: &str, handler: impl FnMut(JsValue) + 'static) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(JsValue)>);
        self.map.on_event(event, closure.as_ref().unchecked_ref());
        self.handlers.push(closure);
    }

    pub fn set_tiles(&mut self, source: &TileSource) {
        if let Some(old) = self.tiles.take() {
            old.remove_layer();
        }
        let layer = tile_layer(&source.url, &js_value(&json!({ "attribution": source.attribution })));
        layer.add_to(&self.map);
        self.tiles = Some(layer);
    }

    /// Replace the track polyline; an empty track removes it.
    pub fn set_track(&mut self, track: &[GeoPoint]) {
        if let Some(old) = self.track.take() {
            old.remove_layer();
        }
        if track.is_empty() {
            return;
        }
        let points: Vec<[f64; 2]> = track.iter().map(|p| p.lat_lng()).collect();
        let layer = polyline(&js_value(&json!(points)), &js_value(&json!({ "color": TRACK_COLOR, "weight": TRACK_WEIGHT })));
        layer.add_to(&self.map);
        self.track = Some(layer);
    }

    /// Replace all POI markers.
    pub fn set_markers(&mut self, pois: &[MapPoi], colors: &CategoryColorMap) {
        if let Some(old) = self.markers.take() {
            old.remove_layer();
        }
        self.marker_handlers.clear();
        let group = layer_group();
        let tooltip_options = js_value(&json!({
            "direction": "top",
            "offset": [0.0, TOOLTIP_OFFSET_Y],
            "opacity": TOOLTIP_OPACITY,
        }));
        let popup_options = js_value(&json!({ "maxWidth": POPUP_MAX_WIDTH }));

        for poi in pois {
            let icon_value = icon(&icon_options(&MarkerIcon::for_color(colors.color_for_poi(poi))));
            let options = js_value(&json!({}));
            let _ = Reflect::set(&options, &JsValue::from_str("icon"), &icon_value);

            let pin = marker(&lat_lng(poi.coords), &options);
            pin.bind_tooltip(&tooltip_html(&TooltipContent::for_poi(poi)), &tooltip_options);
            pin.bind_popup(&popup_html(&PopupContent::for_poi(poi)), &popup_options);

            let target = pin.clone();
            let on_click = Closure::wrap(Box::new(move |_ev: JsValue| {
                target.close_tooltip();
            }) as Box<dyn FnMut(JsValue)>);
            pin.on_marker_event("click", on_click.as_ref().unchecked_ref());
            self.marker_handlers.push(on_click);

            group.add_layer(&pin);
        }
        group.add_to(&self.map);
        self.markers = Some(group);
    }

    /// Tear down the map and release every handler.
    pub fn destroy(self) {
        self.map.remove_map();
    }
}

impl MapEngine for LeafletBridge {
    fn invalidate_size(&mut self) {
        self.map.invalidate_size();
    }

    fn fit_bounds(&mut self, bounds: &GeoBounds, padding: &PaddingBox, animate: bool) {
        let options = js_value(&json!({
            "paddingTopLeft": padding.top_left(),
            "paddingBottomRight": padding.bottom_right(),
            "animate": animate,
        }));
        self.map.fit_bounds(&js_value(&json!(bounds.lat_lng_corners())), &options);
    }

    fn locate_user(&mut self, options: &LocateOptions) {
        let options = js_value(&json!({ "setView": options.set_view, "maxZoom": options.max_zoom }));
        self.map.locate(&options);
    }
}
