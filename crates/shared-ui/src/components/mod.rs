// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod form;
pub mod form_select;
pub mod input;
pub mod navbar;
pub mod page_header;
pub mod search_bar;
pub mod skeleton;
pub mod textarea;

// Primitive wrappers
pub mod separator;
pub mod toast;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use detail_list::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use navbar::*;
pub use page_header::*;
pub use search_bar::*;
pub use separator::*;
pub use skeleton::*;
pub use textarea::*;
pub use toast::*;
