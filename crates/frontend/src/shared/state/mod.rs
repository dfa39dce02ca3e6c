pub mod form_store;
pub mod forms_state;

pub use form_store::{use_form_store, FormStore};
pub use forms_state::FormsState;
