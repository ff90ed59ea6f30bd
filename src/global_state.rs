use leptos::*;
use once_cell::sync::OnceCell;

/// Signals behind the page's form controls
pub struct Globals {
    pub lat_text: RwSignal<String>,
    pub lon_text: RwSignal<String>,
    pub is_fetching: RwSignal<bool>,
    pub chart_loaded: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        lat_text: create_rw_signal(String::new()),
        lon_text: create_rw_signal(String::new()),
        is_fetching: create_rw_signal(false),
        chart_loaded: create_rw_signal(false),
    })
}

crate::global_signals! {
    pub lat_field => lat_text: String,
    pub lon_field => lon_text: String,
    pub fetch_lock => is_fetching: bool,
    pub chart_loaded => chart_loaded: bool,
}
