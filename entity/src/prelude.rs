pub use super::menu_category::Entity as MenuCategory;
pub use super::menu_item::Entity as MenuItem;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::order_status_history::Entity as OrderStatusHistory;
pub use super::room::Entity as Room;
pub use super::user::Entity as User;
