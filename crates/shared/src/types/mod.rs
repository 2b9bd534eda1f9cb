mod uuid;
pub use self::uuid::*;

mod timestamp;
pub use timestamp::*;
