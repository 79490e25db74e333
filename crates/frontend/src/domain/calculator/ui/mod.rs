//! Calculator screen
//!
//! MVVM split as in the other screens, plus an explicit reducer:
//! - state.rs: ViewState, actions and the pure reducer
//! - model.rs: API trait, HTTP client and the async flows
//! - view_model.rs: signals and commands
//! - view.rs: Leptos component (pure UI)

pub mod error;
pub mod model;
pub mod state;
mod view;
mod view_model;

pub use view::CalculatorView;
pub use view_model::CalculatorViewModel;
