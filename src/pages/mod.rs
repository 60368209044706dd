//! Page Controllers
//!
//! One self-contained controller per server-rendered page.

mod catalog;
mod container_detail;
mod shopping_list;

pub use catalog::CatalogPage;
pub use container_detail::ContainerDetailPage;
pub use shopping_list::ShoppingListPage;
