//! Leaflet bindings and the map surface built on them.

use gloo::utils::format::JsValueSerdeExt;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config::MapConfig;
use crate::domain::errors::{AppError, ExternalServiceError};
use crate::domain::location::{MapSurface, Point};
use crate::domain::logging::LogComponent;
use crate::log_debug;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMapHandle;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn leaflet_map(container: &HtmlElement) -> LeafletMapHandle;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMapHandle, center: &Array, zoom: u8) -> LeafletMapHandle;

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMapHandle, event: &str, handler: &Closure<dyn FnMut(LeafletMouseEvent)>);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMapHandle) -> TileLayer;

    pub type LeafletMarker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn leaflet_marker(lat_lng: &Array) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &LeafletMarker, map: &LeafletMapHandle) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &LeafletMarker, lat_lng: &Array) -> LeafletMarker;

    pub type LeafletMouseEvent;

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &LeafletMouseEvent) -> LatLng;

    pub type LatLng;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &LatLng) -> f64;
}

fn lat_lng(point: Point) -> Array {
    Array::of2(&point.lat.into(), &point.lon.into())
}

/// Live Leaflet map with its tile layer and click listener
pub struct LeafletMap {
    handle: LeafletMapHandle,
    _on_click: Closure<dyn FnMut(LeafletMouseEvent)>,
}

impl LeafletMap {
    /// Create the map inside `container`; `on_click` receives clicked coordinates.
    pub fn mount(
        container: &HtmlElement,
        config: &MapConfig,
        mut on_click: impl FnMut(Point) + 'static,
    ) -> Result<Self, AppError> {
        let handle = leaflet_map(container);
        handle.set_view(&lat_lng(config.center), config.zoom);

        let options = JsValue::from_serde(&config.tiles)
            .map_err(|e| ExternalServiceError::MapWidget(format!("Tile options: {}", e)))?;
        tile_layer(&config.tiles.url, &options).add_to(&handle);

        let on_click = Closure::wrap(Box::new(move |event: LeafletMouseEvent| {
            let latlng = event.latlng();
            on_click(Point::new(latlng.lat(), latlng.lng()));
        }) as Box<dyn FnMut(LeafletMouseEvent)>);
        handle.on("click", &on_click);

        log_debug!(
            LogComponent::Infrastructure("Leaflet"),
            "🗺️ Map mounted at {:.4}, {:.4} zoom {}",
            config.center.lat,
            config.center.lon,
            config.zoom
        );

        Ok(Self { handle, _on_click: on_click })
    }
}

impl MapSurface for LeafletMap {
    type Marker = LeafletMarker;

    fn create_marker(&self, point: Point) -> LeafletMarker {
        leaflet_marker(&lat_lng(point)).add_marker_to(&self.handle)
    }

    fn move_marker(&self, marker: &LeafletMarker, point: Point) {
        marker.set_lat_lng(&lat_lng(point));
    }
}
