mod category;
mod product;
mod user;

pub use self::category::Category;
pub use self::product::Product;
pub use self::user::User;
