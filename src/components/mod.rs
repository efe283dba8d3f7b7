//! UI Components
//!
//! Reusable Leptos components.

mod add_item_form;
mod checkup_banner;
mod checkup_manager;
mod delete_confirm_button;
mod filter_bar;
mod item_card;
mod item_edit_form;
mod nav_bar;

pub use add_item_form::AddItemForm;
pub use checkup_banner::CheckupBanner;
pub use checkup_manager::CheckupManager;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use item_card::ItemCard;
pub use item_edit_form::ItemEditForm;
pub use nav_bar::NavBar;
