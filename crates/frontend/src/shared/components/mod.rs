pub mod dynamic_form;
pub mod page_header;
pub mod submission_history;
pub mod ui;
