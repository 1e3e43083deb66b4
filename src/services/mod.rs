pub mod host;
pub mod switcher;
pub mod window_backend;
pub mod window_lister;

#[cfg(test)]
pub(crate) mod fake_backend;

pub use switcher::Switcher;
pub use window_backend::create_window_backend;
