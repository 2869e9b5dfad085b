pub mod button;
pub mod input;
pub mod select;
pub mod switch;
pub mod textarea;

pub use button::Button;
pub use input::Input;
pub use select::Select;
pub use switch::Switch;
pub use textarea::Textarea;
