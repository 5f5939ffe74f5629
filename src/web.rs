//! Browser bindings
//!
//! Exposes a LocalStorage-backed session to the JavaScript UI. Snapshots and
//! outcomes cross the boundary as JSON strings; errors become thrown strings.

use wasm_bindgen::prelude::*;

use crate::game::DifficultyPolicy;
use crate::platform::LocalStore;
use crate::session::{LoadOutcome, Session};
use crate::{GameError, persistence};

fn to_js(error: GameError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A logger survives module re-initialisation
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Figures Please starting...");
}

#[wasm_bindgen]
pub struct WebSession {
    inner: Session<LocalStore>,
}

#[wasm_bindgen]
impl WebSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebSession, JsValue> {
        let store = LocalStore::open().map_err(to_js)?;
        Ok(Self {
            inner: Session::open(store),
        })
    }

    #[wasm_bindgen(js_name = addPlayer)]
    pub fn add_player(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner.add_player(name).map_err(to_js)
    }

    #[wasm_bindgen(js_name = addFigure)]
    pub fn add_figure(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner.add_figure(name).map_err(to_js)
    }

    #[wasm_bindgen(js_name = appendStory)]
    pub fn append_story(&mut self, sentence: &str) -> Result<(), JsValue> {
        self.inner.append_story(sentence).map_err(to_js)
    }

    /// Returns the outcome as JSON
    pub fn record(&mut self, player: &str, figure: &str, correct: bool) -> Result<String, JsValue> {
        let outcome = self.inner.record(player, figure, correct).map_err(to_js)?;
        serde_json::to_string(&outcome).map_err(|e| to_js(e.into()))
    }

    pub fn save(&mut self) -> Result<(), JsValue> {
        self.inner.save().map_err(to_js)
    }

    /// True when a saved game replaced the current one
    pub fn load(&mut self) -> Result<bool, JsValue> {
        let outcome = self.inner.load().map_err(to_js)?;
        Ok(outcome == LoadOutcome::Restored)
    }

    #[wasm_bindgen(js_name = hasSave)]
    pub fn has_save(&self) -> Result<bool, JsValue> {
        self.inner.has_save().map_err(to_js)
    }

    #[wasm_bindgen(js_name = clearSave)]
    pub fn clear_save(&mut self) -> Result<(), JsValue> {
        self.inner.clear_save().map_err(to_js)
    }

    /// Full game document as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        persistence::save(self.inner.state()).map_err(to_js)
    }

    /// Ranked standings as JSON
    pub fn leaderboard(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.leaderboard()).map_err(|e| to_js(e.into()))
    }

    /// Numbered story lines, ready to display
    #[wasm_bindgen(js_name = storyLines)]
    pub fn story_lines(&self) -> Vec<String> {
        self.inner
            .state()
            .story()
            .numbered()
            .map(|(n, sentence)| format!("{n}. {sentence}"))
            .collect()
    }

    /// Story as plain text, one sentence per line
    #[wasm_bindgen(js_name = storyText)]
    pub fn story_text(&self) -> String {
        self.inner.state().story().to_text()
    }

    /// Figures easiest first, as JSON
    #[wasm_bindgen(js_name = figuresByWeight)]
    pub fn figures_by_weight(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.figures_by_weight()).map_err(|e| to_js(e.into()))
    }

    /// 1-indexed leaderboard position, if the player is listed
    #[wasm_bindgen(js_name = rankOf)]
    pub fn rank_of(&self, player: &str) -> Option<usize> {
        self.inner.leaderboard().rank_of(player)
    }

    #[wasm_bindgen(js_name = hasUnsavedChanges)]
    pub fn has_unsaved_changes(&self) -> bool {
        self.inner.has_unsaved_changes()
    }

    pub fn policy(&self) -> String {
        self.inner.settings().policy.as_str().to_string()
    }

    #[wasm_bindgen(js_name = setPolicy)]
    pub fn set_policy(&mut self, name: &str) -> Result<(), JsValue> {
        let policy = DifficultyPolicy::from_str(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown policy: {name}")))?;
        self.inner.set_policy(policy).map_err(to_js)
    }
}
