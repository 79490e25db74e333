use super::state::{format_number, CalculationDisplay, Field, ViewState};
use super::view_model::CalculatorViewModel;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CalculatorView() -> impl IntoView {
    let vm = CalculatorViewModel::new();
    vm.initialize();

    on_cleanup(|| log::debug!("CalculatorView disposed"));

    view! {
        <div class="calculator">
            <h2 class="calculator__heading">"Calculator"</h2>

            <input
                type="text"
                class="calculator__input"
                placeholder="Enter first number"
                prop:value=move || vm.state.with(|s| s.num1_text.clone())
                on:input=move |ev| vm.edit(Field::Num1, event_target_value(&ev))
            />
            <input
                type="text"
                class="calculator__input"
                placeholder="Enter operator (+, -, *, /)"
                prop:value=move || vm.state.with(|s| s.operator_text.clone())
                on:input=move |ev| vm.edit(Field::Operator, event_target_value(&ev))
            />
            <input
                type="text"
                class="calculator__input"
                placeholder="Enter second number"
                prop:value=move || vm.state.with(|s| s.num2_text.clone())
                on:input=move |ev| vm.edit(Field::Num2, event_target_value(&ev))
            />

            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| vm.calculate_command()
            >
                "Calculate"
            </Button>

            {move || match vm.state.with(ViewState::calculation_display) {
                CalculationDisplay::Nothing => ().into_any(),
                CalculationDisplay::Error(message) => view! {
                    <div class="calculator__error">{message}</div>
                }
                .into_any(),
                CalculationDisplay::Result(value) => view! {
                    <div class="calculator__result">"Result: " {format_number(value)}</div>
                }
                .into_any(),
            }}

            <h2 class="calculator__heading">"String Concepts"</h2>
            {move || {
                let display = vm.state.with(ViewState::concepts_display);
                view! {
                    {display.value.map(|value| view! {
                        <div class="calculator__concepts">"Implicit Result: " {value}</div>
                    })}
                    {display.name.map(|name| view! {
                        <div class="calculator__concepts">"Name: " {name}</div>
                    })}
                }
            }}
        </div>
    }
}
