pub mod category;
pub mod expense;
pub mod icons;

pub use category::{default_categories, resolve_category, unknown_category, Category};
pub use expense::Expense;
pub use icons::resolve_icon;
