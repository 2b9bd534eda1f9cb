mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

mod date;
pub use date::*;

use crate::api::error::ServerError;

/// Checks a loosely typed request and turns it into the typed value the store
/// works with
pub trait ValidateModel {
    type Valid;

    fn validate(self) -> Result<Self::Valid, ServerError>;
}
