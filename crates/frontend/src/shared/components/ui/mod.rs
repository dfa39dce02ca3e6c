pub mod button;
pub mod checkbox;
pub mod error;
pub mod input;
pub mod select;
pub mod textarea;

pub use button::Button;
pub use checkbox::Checkbox;
pub use error::FieldError;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
