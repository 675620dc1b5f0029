pub mod demo;
pub mod new;
