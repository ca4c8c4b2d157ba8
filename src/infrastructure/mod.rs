pub mod backends;
pub mod translators;
