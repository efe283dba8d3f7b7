//! Pages
//!
//! One view per route.

mod calculator;
mod home;
mod lists;

pub use calculator::CalculatorView;
pub use home::HomeView;
pub use lists::{DonatedView, GiveView, KeepView};
