pub mod left;
pub mod menu_entry;
pub mod tree_menu;

pub use left::Left;
pub use menu_entry::{MenuGroup, MenuItemLink};
pub use tree_menu::TreeMenu;
