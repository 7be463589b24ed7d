//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod avatar;
pub mod banner;
pub mod footer;
pub mod header;
pub mod hero;
pub mod loading;

pub use avatar::Avatar;
pub use banner::Banner;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use loading::Loading;
