use serde_json::{Value, json};
use wind_forecast_wasm::config::ViewportConfig;
use wind_forecast_wasm::domain::chart::ViewportSession;
use wind_forecast_wasm::domain::chart::figure::{ChartFigure, axis_range, direction_label};
use wind_forecast_wasm::domain::forecast::{MILLIS_PER_HOUR, TimeSeries, Timestamp, WindUnit};
use wind_forecast_wasm::time_utils::{parse_timestamp, utc_offset};

fn series(count: usize) -> TimeSeries {
    let start = parse_timestamp("2025-03-01T00:00:00Z", utc_offset()).unwrap();
    let time: Vec<Timestamp> = (0..count as i64).map(|h| start.offset_by(h * MILLIS_PER_HOUR)).collect();
    let speed: Vec<f64> = (0..count).map(|i| 5.0 + i as f64).collect();
    let gust: Vec<Option<f64>> = (0..count).map(|i| if i % 3 == 0 { None } else { Some(8.0 + i as f64) }).collect();
    let dir: Vec<Option<f64>> = (0..count).map(|i| if i == 1 { None } else { Some(359.6) }).collect();
    TimeSeries::from_columns(time, speed, gust, dir, WindUnit::Knots).unwrap()
}

fn figure_json(series: &TimeSeries) -> (Value, ViewportSession) {
    let session = ViewportSession::from_series(series, &ViewportConfig::default());
    let figure = ChartFigure::build(series, &session, "Wind", utc_offset());
    (serde_json::to_value(&figure).unwrap(), session)
}

#[test]
fn bars_carry_speed_and_gust_excess() {
    let series = series(6);
    let (figure, _) = figure_json(&series);
    let bars = &figure["data"][0];

    assert_eq!(bars["type"], "bar");
    assert_eq!(bars["y"], json!([5.0, 6.0, 7.0, 8.0, 9.0, 10.0]));
    assert_eq!(bars["error_y"]["array"], json!([0.0, 3.0, 3.0, 0.0, 3.0, 3.0]));
    assert_eq!(bars["error_y"]["arrayminus"], json!(vec![0.0; 6]));
    assert_eq!(bars["error_y"]["symmetric"], false);
    assert_eq!(bars["marker"]["cmin"], 5.0);
    assert_eq!(bars["marker"]["cmax"], 13.0);
    assert_eq!(bars["customdata"][0], json!([null, "Sat, Mar 1", "00:00"]));
    assert_eq!(bars["x"][1], "2025-03-01 01:00:00.000");
}

#[test]
fn direction_row_labels() {
    let (figure, _) = figure_json(&series(3));
    let text = &figure["data"][1];

    assert_eq!(text["type"], "scatter");
    assert_eq!(text["yaxis"], "y2");
    assert_eq!(text["text"], json!(["360°", "", "360°"]));
    assert_eq!(text["y"], json!([0.3, 0.3, 0.3]));
}

#[test]
fn layout_starts_at_padded_left_edge() {
    let series = series(120);
    let (figure, session) = figure_json(&series);
    let xaxis = &figure["layout"]["xaxis"];

    assert_eq!(xaxis["range"], json!(axis_range(session.viewport(), utc_offset())));
    assert_eq!(xaxis["range"][0], "2025-02-28 23:30:00.000");
    assert_eq!(xaxis["range"][1], "2025-03-02 11:30:00.000");
    assert_eq!(xaxis["tickvals"].as_array().unwrap().len(), 60);
    assert_eq!(figure["layout"]["dragmode"], "pan");
    assert_eq!(figure["layout"]["yaxis"]["fixedrange"], true);
    assert_eq!(figure["layout"]["yaxis"]["title"]["text"], "Knots");
    assert_eq!(figure["layout"]["yaxis2"]["visible"], false);
}

#[test]
fn engine_zoom_affordances_are_off() {
    let series = series(2);
    let session = ViewportSession::from_series(&series, &ViewportConfig::default());
    let figure = ChartFigure::build(&series, &session, "Wind", utc_offset());
    insta::assert_json_snapshot!(figure.config, @r#"
    {
      "responsive": true,
      "scrollZoom": false,
      "doubleClick": false
    }
    "#);
}

#[test]
fn direction_label_rounds_degrees() {
    assert_eq!(direction_label(Some(272.6)), "273°");
    assert_eq!(direction_label(Some(0.0)), "0°");
    assert_eq!(direction_label(None), "");
}
