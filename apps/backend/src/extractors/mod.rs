pub mod couple_scope;
pub mod current_user;
pub mod item_id;
pub mod validated_json;

pub use couple_scope::CoupleScope;
pub use current_user::CurrentUser;
pub use item_id::ItemId;
pub use validated_json::ValidatedJson;
