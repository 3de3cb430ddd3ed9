pub mod app;
pub mod err;
pub mod session;
pub mod utils;

pub use app::App;
