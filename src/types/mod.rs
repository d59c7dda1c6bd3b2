mod entity;
mod error;
mod package;
mod user;

pub use entity::*;
pub use error::*;
pub use package::*;
pub use user::*;
