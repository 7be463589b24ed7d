//! Pages
//!
//! Top-level page components for each route.

pub mod chatbot;
pub mod cybertools;
pub mod home;
pub mod login;
pub mod posts;
pub mod profile;
pub mod signup;
pub mod upload_post;

pub use chatbot::Chatbot;
pub use cybertools::CyberTools;
pub use home::Home;
pub use login::Login;
pub use posts::Posts;
pub use profile::Profile;
pub use signup::Signup;
pub use upload_post::UploadPost;
