pub mod error;
pub mod models;
pub mod store;
pub mod testutil;
pub mod traits;
pub mod util;

pub use error::AppError;
pub use models::{NewUser, User, UserPatch, is_truthy, seed_users};
pub use store::InMemoryUserStore;
pub use traits::UserStore;
pub use util::parse_user_id;
