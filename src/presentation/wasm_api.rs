//! JS entry points; thin bridges to the installed page.

use wasm_bindgen::prelude::*;

use super::ForecastPage;

fn page() -> Result<std::rc::Rc<ForecastPage>, JsValue> {
    ForecastPage::current().ok_or_else(|| JsValue::from_str("Forecast page is not initialized"))
}

/// Select a point as if it had been clicked on the map.
#[wasm_bindgen(js_name = setPoint)]
pub fn set_point(lat: f64, lon: f64) -> Result<(), JsValue> {
    page()?.set_point(lat, lon);
    Ok(())
}

/// Same as pressing the trigger button.
#[wasm_bindgen(js_name = generateForecast)]
pub async fn generate_forecast() -> Result<(), JsValue> {
    page()?.generate_forecast().await;
    Ok(())
}
