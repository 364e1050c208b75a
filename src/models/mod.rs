pub mod crypto;
pub mod envelope;
pub mod session;
pub mod token;
