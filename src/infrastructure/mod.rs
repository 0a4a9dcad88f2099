pub mod dom;
pub mod services;
