pub mod appconfig;
pub mod apple_touch;
pub mod converter;
pub mod favicon;
pub mod ico;
