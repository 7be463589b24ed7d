//! State Management
//!
//! Session state, feed models, and request sequencing.

pub mod feed;
pub mod requests;
pub mod session;

pub use feed::{apply_like, Author, Comment, Post};
pub use requests::RequestSeq;
pub use session::{provide_session, use_session, Session, User};
