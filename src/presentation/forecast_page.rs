use std::cell::RefCell;
use std::rc::Rc;

use gloo::utils::format::JsValueSerdeExt;
use leptos::{SignalGetUntracked, SignalSet};
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, WheelEvent};

use crate::application::{FetchForecastUseCase, FetchOutcome, LoadedForecast};
use crate::config::AppConfig;
use crate::domain::chart::figure::ChartFigure;
use crate::domain::chart::{RelayoutOutcome, Viewport, ViewportChanged, ViewportSession, WheelInput, WheelOutcome};
use crate::domain::errors::{AppError, ConfigurationError, ExternalServiceError};
use crate::domain::location::{Point, PointFields, PointSelector};
use crate::domain::logging::LogComponent;
use crate::event_utils::{EventListenerHandle, EventOptions, event_listener_with_options};
use crate::global_state::{chart_loaded, fetch_lock, lat_field, lon_field};
use crate::infrastructure::http::ForecastHttpClient;
use crate::infrastructure::map::LeafletMap;
use crate::infrastructure::rendering::PlotlyChart;
use crate::infrastructure::ui;
use crate::time_utils::BrowserZone;
use crate::{log_debug, log_error, log_info, log_warn};

const CONFIG_GLOBAL: &str = "FORECAST_CONFIG";

thread_local! {
    static CURRENT_PAGE: RefCell<Option<Rc<ForecastPage>>> = const { RefCell::new(None) };
}

/// Read the optional page-supplied configuration, defaults otherwise.
pub fn load_config() -> Result<AppConfig, ConfigurationError> {
    let raw = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(CONFIG_GLOBAL))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null());
    let Some(raw) = raw else {
        return Ok(AppConfig::default());
    };

    let config: AppConfig = raw
        .into_serde()
        .map_err(|e| ConfigurationError::DeserializationFailed(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Log and alert; the attempt that produced `error` is over.
pub fn report(error: &AppError) {
    log_error!(LogComponent::Presentation("ForecastPage"), "❌ {}", error);
    ui::alert(&error.user_message());
}

/// Clamp the engine-reported window; `Some` when the engine must be corrected.
fn relayout_correction(session: &RefCell<Option<ViewportSession>>, changed: ViewportChanged) -> Option<Viewport> {
    match session.borrow_mut().as_mut()?.handle_relayout(changed) {
        RelayoutOutcome::Corrected(viewport) => Some(viewport),
        RelayoutOutcome::Accepted(_) | RelayoutOutcome::Ignored => None,
    }
}

/// Everything one page load owns: map, chart, current session.
/// Confined to the browser's event thread.
pub struct ForecastPage {
    config: AppConfig,
    use_case: FetchForecastUseCase<ForecastHttpClient>,
    selector: RefCell<Option<PointSelector<LeafletMap>>>,
    chart: RefCell<Option<Rc<PlotlyChart>>>,
    session: Rc<RefCell<Option<ViewportSession>>>,
    wheel_listener: RefCell<Option<EventListenerHandle>>,
}

impl ForecastPage {
    pub fn new(config: AppConfig) -> Rc<Self> {
        let client = ForecastHttpClient::new(config.forecast_endpoint.clone());
        Rc::new(Self {
            use_case: FetchForecastUseCase::new(client, config.clone()),
            config,
            selector: RefCell::new(None),
            chart: RefCell::new(None),
            session: Rc::new(RefCell::new(None)),
            wheel_listener: RefCell::new(None),
        })
    }

    /// Make `page` reachable from the exported JS functions.
    pub fn install(page: Rc<Self>) {
        CURRENT_PAGE.with(|current| current.replace(Some(page)));
    }

    pub fn current() -> Option<Rc<Self>> {
        CURRENT_PAGE.with(|current| current.borrow().clone())
    }

    /// Create the map and place the default point.
    pub fn mount_map(self: &Rc<Self>, container: &HtmlElement) -> Result<(), AppError> {
        let page = Rc::downgrade(self);
        let map = LeafletMap::mount(container, &self.config.map, move |point: Point| {
            if let Some(page) = page.upgrade() {
                page.set_point(point.lat, point.lon);
            }
        })?;
        self.selector.replace(Some(PointSelector::new(map)));

        let point = self.config.default_point;
        self.set_point(point.lat, point.lon);
        Ok(())
    }

    /// Attach the chart container and its wheel panning.
    pub fn mount_chart(&self, container: HtmlElement) {
        let chart = Rc::new(PlotlyChart::new(container.clone()));
        let session = self.session.clone();
        let wheel_chart = chart.clone();

        let listener = event_listener_with_options(
            &container,
            leptos::ev::wheel,
            &EventOptions::active(),
            move |ev: WheelEvent| {
                let input = WheelInput::new(ev.delta_x(), ev.delta_y(), ev.shift_key());
                let outcome = session.borrow_mut().as_mut().map(|s| s.handle_wheel(input));
                if let Some(WheelOutcome::Panned(viewport)) = outcome {
                    ev.prevent_default();
                    if let Err(e) = wheel_chart.set_range(viewport) {
                        log_warn!(LogComponent::Presentation("ForecastPage"), "Wheel pan failed: {}", e);
                    }
                }
            },
        );

        if let Some(previous) = self.wheel_listener.replace(Some(listener)) {
            previous.remove();
        }
        self.chart.replace(Some(chart));
    }

    /// Move the point and mirror it into the coordinate fields.
    pub fn set_point(&self, lat: f64, lon: f64) {
        let fields = match self.selector.borrow_mut().as_mut() {
            Some(selector) => selector.set_point(lat, lon),
            None => {
                log_warn!(LogComponent::Presentation("ForecastPage"), "Map not mounted; updating fields only");
                PointFields::from(Point::new(lat, lon))
            }
        };
        log_debug!(LogComponent::Presentation("ForecastPage"), "📍 Point {}, {}", fields.lat, fields.lon);
        lat_field().set(fields.lat);
        lon_field().set(fields.lon);
    }

    /// Fetch for the point in the fields and redraw. Failures are reported
    /// and leave the current chart in place.
    pub async fn generate_forecast(&self) {
        let lat = lat_field().get_untracked();
        let lon = lon_field().get_untracked();

        let result = match self.use_case.execute(&lat, &lon, &fetch_lock()).await {
            Ok(FetchOutcome::Loaded(loaded)) => self.show(loaded).await,
            Ok(FetchOutcome::Skipped) => Ok(()),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            report(&e);
        }
    }

    async fn show(&self, loaded: LoadedForecast) -> Result<(), AppError> {
        let chart = self
            .chart
            .borrow()
            .clone()
            .ok_or_else(|| ExternalServiceError::BrowserApi("Chart container not mounted".to_string()))?;

        let LoadedForecast { series, session } = loaded;
        let figure = ChartFigure::build(&series, &session, &self.config.chart_title, BrowserZone);

        let shared = self.session.clone();
        chart
            .render(&figure, move |changed| relayout_correction(&shared, changed))
            .await?;

        let viewport = session.viewport();
        self.session.replace(Some(session));
        chart_loaded().set(true);
        log_info!(
            LogComponent::Presentation("ForecastPage"),
            "📊 Showing {} samples, window {} - {}",
            series.len(),
            viewport.start,
            viewport.end
        );
        Ok(())
    }
}
