use crate::domain::calculator::ui::CalculatorView;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <main class="app">
                <CalculatorView />
            </main>
        </ConfigProvider>
    }
}
