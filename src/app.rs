use leptos::html::Div;
use leptos::*;
use std::rc::Rc;

use crate::global_state::{chart_loaded, fetch_lock, lat_field, lon_field};
use crate::presentation::{ForecastPage, report};

pub const IDLE_LABEL: &str = "Generate Forecast";
pub const FETCHING_LABEL: &str = "Fetching...";

/// Text of the trigger button for the given lock state
pub fn trigger_label(fetching: bool) -> &'static str {
    if fetching { FETCHING_LABEL } else { IDLE_LABEL }
}

/// 🌬️ Root component: point controls, map and forecast chart
#[component]
pub fn App(page: Rc<ForecastPage>) -> impl IntoView {
    view! {
        <style>
            {r#"
            .wind-app {
                font-family: Arial, sans-serif;
                background: rgb(245,245,245);
                min-height: 100vh;
                padding: 20px;
                color: #222;
            }

            .controls {
                display: flex;
                gap: 12px;
                align-items: center;
                margin-bottom: 12px;
            }

            .controls input {
                width: 110px;
                font-family: 'Courier New', monospace;
            }

            .map {
                height: 360px;
                border-radius: 8px;
                margin-bottom: 16px;
            }

            .plot-bar {
                opacity: 0;
                transition: opacity 0.3s ease;
            }

            .plot-bar.loaded {
                opacity: 1;
            }

            .plot {
                height: 480px;
            }
            "#}
        </style>
        <div class="wind-app">
            <PointControls page=page.clone()/>
            <MapView page=page.clone()/>
            <ForecastChart page=page/>
        </div>
    }
}

#[component]
fn PointControls(page: Rc<ForecastPage>) -> impl IntoView {
    let lat = lat_field();
    let lon = lon_field();
    let fetching = fetch_lock();

    let on_generate = move |_| {
        let page = page.clone();
        spawn_local(async move {
            page.generate_forecast().await;
        });
    };

    view! {
        <div class="controls">
            <label>
                "Lat "
                <input id="lat" type="text"
                    prop:value=move || lat.get()
                    on:input=move |ev| lat.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Lon "
                <input id="lon" type="text"
                    prop:value=move || lon.get()
                    on:input=move |ev| lon.set(event_target_value(&ev))
                />
            </label>
            <button id="go" disabled=move || fetching.get() on:click=on_generate>
                {move || trigger_label(fetching.get())}
            </button>
        </div>
    }
}

#[component]
fn MapView(page: Rc<ForecastPage>) -> impl IntoView {
    let map_ref = create_node_ref::<Div>();

    map_ref.on_load(move |el| {
        let container: web_sys::HtmlElement = (*el).clone().into();
        // The widget measures its container, so wait until it is in the document.
        request_animation_frame(move || {
            if let Err(e) = page.mount_map(&container) {
                report(&e);
            }
        });
    });

    view! { <div id="map" class="map" node_ref=map_ref></div> }
}

#[component]
fn ForecastChart(page: Rc<ForecastPage>) -> impl IntoView {
    let plot_ref = create_node_ref::<Div>();
    let loaded = chart_loaded();

    plot_ref.on_load(move |el| {
        let container: web_sys::HtmlElement = (*el).clone().into();
        page.mount_chart(container);
    });

    view! {
        <div id="plotBar" class="plot-bar" class:loaded=move || loaded.get()>
            <div id="plot" class="plot" node_ref=plot_ref></div>
        </div>
    }
}
