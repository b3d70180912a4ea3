mod error;
mod lifetime;
