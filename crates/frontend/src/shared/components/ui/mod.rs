pub mod badge;
pub mod button;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
