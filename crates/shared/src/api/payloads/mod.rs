mod form_value;
pub use form_value::*;

mod user;
pub use user::*;

mod exercise;
pub use exercise::*;
