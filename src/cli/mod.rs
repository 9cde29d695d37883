mod server;
mod submit;

pub use server::serve;
pub use submit::{ContactArgs, SubscribeArgs, contact, subscribe};
