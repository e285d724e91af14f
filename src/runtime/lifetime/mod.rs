pub mod browser;
pub mod shutdown;
pub mod startup;
