use serde::{Deserialize, Serialize};

use crate::{
    api::error::ServerError,
    model::{NewUser, ValidateModel},
    validation_error,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUserRequest {
    #[serde(default)]
    pub username: Option<String>,
}

impl ValidateModel for NewUserRequest {
    type Valid = NewUser;

    fn validate(self) -> Result<NewUser, ServerError> {
        match self.username {
            Some(username) if !username.is_empty() => Ok(NewUser::new(username)),
            _ => Err(validation_error!("Username missing")),
        }
    }
}
