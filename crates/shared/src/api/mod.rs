use const_format::concatcp;
pub mod error;
pub mod payloads;

pub const API_BASE_PATH: &str = "/api/exercise/";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    NewUser,
    Users,
    AddExercise,
    Log,
}

impl Object {
    pub const fn path(&self) -> &'static str {
        use Object::*;
        match self {
            NewUser => concatcp!(API_BASE_PATH, "new-user"),
            Users => concatcp!(API_BASE_PATH, "users"),
            AddExercise => concatcp!(API_BASE_PATH, "add"),
            Log => concatcp!(API_BASE_PATH, "log"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Object;

    #[test]
    fn test_paths() {
        assert_eq!(Object::NewUser.path(), "/api/exercise/new-user");
        assert_eq!(Object::Users.path(), "/api/exercise/users");
        assert_eq!(Object::AddExercise.path(), "/api/exercise/add");
        assert_eq!(Object::Log.path(), "/api/exercise/log");
    }
}
