use std::cell::RefCell;

use gloo::utils::format::JsValueSerdeExt;
use js_sys::Promise;
use serde::Serialize;
use serde_json::{Value, json};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlElement;

use super::relayout::parse_relayout;
use crate::domain::chart::figure::{ChartFigure, axis_range};
use crate::domain::chart::{Viewport, ViewportChanged};
use crate::domain::errors::{AppError, ExternalServiceError, js_error_text};
use crate::domain::logging::LogComponent;
use crate::time_utils::BrowserZone;
use crate::{log_debug, log_warn};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(root: &HtmlElement, data: &JsValue, layout: &JsValue, config: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn relayout(root: &HtmlElement, update: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(root: &HtmlElement) -> Result<JsValue, JsValue>;

    type GraphDiv;

    #[wasm_bindgen(method)]
    fn on(this: &GraphDiv, event: &str, handler: &Closure<dyn FnMut(JsValue)>);
}

type RelayoutCallback = Closure<dyn FnMut(JsValue)>;

fn engine_error(context: &str, error: JsValue) -> AppError {
    ExternalServiceError::ChartEngine(format!("{}: {}", context, js_error_text(&error))).into()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, AppError> {
    JsValue::from_serde(value).map_err(|e| ExternalServiceError::ChartEngine(e.to_string()).into())
}

fn apply_range(root: &HtmlElement, viewport: Viewport) -> Result<Promise, AppError> {
    let update = to_js(&json!({ "xaxis.range": axis_range(viewport, BrowserZone) }))?;
    relayout(root, &update).map_err(|e| engine_error("relayout", e))
}

/// Plotly chart living in one container element
pub struct PlotlyChart {
    root: HtmlElement,
    relayout_callback: RefCell<Option<RelayoutCallback>>,
}

impl PlotlyChart {
    pub fn new(root: HtmlElement) -> Self {
        Self { root, relayout_callback: RefCell::new(None) }
    }

    /// Draw `figure` from scratch, replacing any previous plot and its
    /// listeners. `on_relayout` sees every time axis change; when it returns
    /// a window the engine is forced back to it.
    pub async fn render(
        &self,
        figure: &ChartFigure,
        mut on_relayout: impl FnMut(ViewportChanged) -> Option<Viewport> + 'static,
    ) -> Result<(), AppError> {
        purge(&self.root).map_err(|e| engine_error("purge", e))?;

        let data = to_js(&figure.data)?;
        let layout = to_js(&figure.layout)?;
        let config = to_js(&figure.config)?;

        let promise = new_plot(&self.root, &data, &layout, &config).map_err(|e| engine_error("newPlot", e))?;
        JsFuture::from(promise).await.map_err(|e| engine_error("newPlot", e))?;

        let root = self.root.clone();
        let callback = Closure::wrap(Box::new(move |event: JsValue| {
            let payload: Value = event.into_serde().unwrap_or(Value::Null);
            let changed = parse_relayout(&payload, BrowserZone);
            let Some(corrected) = on_relayout(changed) else {
                return;
            };
            // Corrected outside this callback; the engine reports the forced range as a new relayout.
            let root = root.clone();
            spawn_local(async move {
                let result = match apply_range(&root, corrected) {
                    Ok(promise) => JsFuture::from(promise).await.map(drop).map_err(|e| engine_error("relayout", e)),
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    log_warn!(LogComponent::Infrastructure("Plotly"), "Range correction failed: {}", e);
                }
            });
        }) as Box<dyn FnMut(JsValue)>);

        self.root.unchecked_ref::<GraphDiv>().on("plotly_relayout", &callback);
        // Purge dropped the engine's reference to any previous callback.
        self.relayout_callback.replace(Some(callback));

        log_debug!(LogComponent::Infrastructure("Plotly"), "📊 Chart rendered");
        Ok(())
    }

    /// Move the visible time window
    pub fn set_range(&self, viewport: Viewport) -> Result<(), AppError> {
        apply_range(&self.root, viewport).map(drop)
    }
}
