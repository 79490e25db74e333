use super::model::{self, HttpApi};
use super::state::{Action, Field, ViewState};
use crate::shared::api_utils::{Endpoints, Platform};
use leptos::prelude::*;

/// ViewModel for the calculator screen
///
/// Copy-able handle: the state lives in a signal owned by the view, the API
/// client in a stored value next to it.
#[derive(Clone, Copy)]
pub struct CalculatorViewModel {
    pub state: RwSignal<ViewState>,
    api: StoredValue<HttpApi>,
}

impl CalculatorViewModel {
    pub fn new() -> Self {
        let platform = Platform::detect();
        let base = platform.base_address();
        log::debug!("Calculator services on {} ({:?})", base, platform);

        Self {
            state: RwSignal::new(ViewState::default()),
            api: StoredValue::new(HttpApi::new(Endpoints::for_base(base))),
        }
    }

    /// Mount: show the loading state and fire the one concepts fetch
    pub fn initialize(&self) {
        dispatch(self.state, Action::Initialize);

        let state = self.state;
        let api = self.api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            dispatch(state, model::load_concepts(&api).await);
        });
    }

    pub fn edit(&self, field: Field, text: String) {
        dispatch(self.state, Action::Edit(field, text));
    }

    /// "Calculate" pressed
    ///
    /// No debouncing: every press runs on its own and the last completion
    /// wins.
    pub fn calculate_command(&self) {
        let state = self.state;
        let snapshot = state.get_untracked();
        let api = self.api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            dispatch(state, model::calculate(&api, &snapshot).await);
        });
    }
}

impl Default for CalculatorViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply an action unless the view that owns `state` is already gone
fn dispatch(state: RwSignal<ViewState>, action: Action) {
    let applied = state.try_update(|s| {
        let current = std::mem::take(s);
        *s = current.reduce(action);
    });
    if applied.is_none() {
        log::debug!("Calculator view disposed, dropping late update");
    }
}
