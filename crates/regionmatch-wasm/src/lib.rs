//! regionmatch-wasm: WebAssembly bindings for regionmatch-core
//!
//! Exposes a small session object to JavaScript. The dataset compiled into
//! `regionmatch-core` is parsed once on first use; every `Session` borrows it.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { Session } from 'regionmatch-wasm';
//!
//! async function main() {
//!   await init();
//!   const s = new Session();
//!   console.log(s.suggest('new'));        // ["New Hampshire", ...]
//!   s.select_region('New York');
//!   s.set_axis('gdp');
//!   s.set_gdp_mode('per-capita');
//!   console.log(s.comparison());          // { headers, rows, ... }
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Setters take the same strings the CLI accepts (`land`, `pop`, `gdp`,
//!   `hdi`; `absolute`, `per-capita`; `mi2`, `km2`) and throw on anything else.
//! - `comparison()` and `summary()` return plain JS objects, or `null` when
//!   nothing is selected.
use regionmatch_core::{AppState, Autocomplete, Axis, Dataset, GdpMode, LandUnit, RegionGroup};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    match Dataset::bundled() {
        Ok(db) => {
            let stats = db.stats();
            web_sys::console::log_1(
                &format!(
                    "regionmatch: {} US regions, {} European countries",
                    stats.domestic, stats.foreign
                )
                .into(),
            );
        }
        Err(e) => web_sys::console::error_1(&format!("regionmatch: {e}").into()),
    }
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/* --------------------------------------------------------------------------
   Session
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct Session {
    state: AppState<'static>,
    picker: Autocomplete,
}

#[wasm_bindgen]
impl Session {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Session, JsValue> {
        let db = Dataset::bundled().map_err(js_err)?;
        Ok(Session {
            state: AppState::new(db),
            picker: Autocomplete::for_dataset(db),
        })
    }

    /// All region names, sorted.
    pub fn names(&self) -> js_sys::Array {
        self.picker
            .options()
            .iter()
            .map(|n| JsValue::from_str(n))
            .collect()
    }

    /// Up to five names starting with `text`.
    pub fn suggest(&mut self, text: &str) -> Vec<String> {
        self.picker.input(text);
        self.picker
            .suggestions()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Selects by exact name (any case). Returns `false` for unknown names.
    pub fn select_region(&mut self, name: &str) -> bool {
        self.state.select_region(name)
    }

    /// Selects by name within one pool (`us` or `eu`).
    pub fn select_in(&mut self, group: &str, name: &str) -> Result<bool, JsValue> {
        let group: RegionGroup = group.parse().map_err(js_err)?;
        Ok(self.state.select_in(group, name))
    }

    pub fn set_axis(&mut self, axis: &str) -> Result<(), JsValue> {
        self.state.set_axis(axis.parse::<Axis>().map_err(js_err)?);
        Ok(())
    }

    pub fn set_gdp_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        self.state.set_gdp_mode(mode.parse::<GdpMode>().map_err(js_err)?);
        Ok(())
    }

    pub fn set_land_unit(&mut self, unit: &str) -> Result<(), JsValue> {
        self.state.set_land_unit(unit.parse::<LandUnit>().map_err(js_err)?);
        Ok(())
    }

    pub fn set_candidates(&mut self, k: usize) {
        self.state.set_candidates(k);
    }

    pub fn selected(&self) -> Option<String> {
        self.state.selected().map(|r| r.name.clone())
    }

    pub fn axis(&self) -> String {
        self.state.axis().code().to_string()
    }

    /// Names of the comparison rows in table order.
    pub fn match_names(&self) -> Vec<String> {
        self.state
            .match_results()
            .iter()
            .map(|r| r.name.clone())
            .collect()
    }

    pub fn comparison(&self) -> Result<JsValue, JsValue> {
        match self.state.comparison() {
            Some(table) => to_value(&table).map_err(js_err),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn summary(&self) -> Result<JsValue, JsValue> {
        match self.state.summary() {
            Some(s) => to_value(&s).map_err(js_err),
            None => Ok(JsValue::NULL),
        }
    }
}

/* --------------------------------------------------------------------------
   Free functions
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn region_count() -> Result<usize, JsValue> {
    Ok(Dataset::bundled().map_err(js_err)?.stats().total())
}
