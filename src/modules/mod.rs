pub mod auth;
pub mod health;
pub mod pets;
pub mod protected;

pub use self::auth::model::{LoginQuery, LoginResponse};
pub use self::pets::model::{Pet, PetKind};
