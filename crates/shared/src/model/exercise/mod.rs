mod exercise;
pub use exercise::*;

mod new;
pub use new::*;

mod log;
pub use log::*;
