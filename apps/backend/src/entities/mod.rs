pub mod budget_items;
pub mod couples;
pub mod todos;
pub mod user_credentials;
pub mod users;
pub mod vendors;
pub mod wishlist_items;

pub use budget_items::Entity as BudgetItems;
pub use budget_items::Model as BudgetItem;
pub use couples::Entity as Couples;
pub use couples::Model as Couple;
pub use todos::Entity as Todos;
pub use todos::Model as Todo;
pub use user_credentials::Entity as UserCredentials;
pub use user_credentials::Model as UserCredential;
pub use users::Entity as Users;
pub use users::Model as User;
pub use vendors::Entity as Vendors;
pub use vendors::Model as Vendor;
pub use wishlist_items::Entity as WishlistItems;
pub use wishlist_items::Model as WishlistItem;
