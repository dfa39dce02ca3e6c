//! Contact page
//!
//! MVVM split:
//! - model.rs: the form declaration
//! - view_model.rs: draft state and submit/cancel commands
//! - view.rs: Leptos component

pub mod model;
mod view;
mod view_model;

pub use view::ContactPage;
pub use view_model::ContactViewModel;
