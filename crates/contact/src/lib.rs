mod outbox;
mod root;

pub use outbox::*;
pub use root::*;
