//! Application layer around the profile editor: where pages navigate and
//! how a session is established before the editor is entered.

pub mod route;
pub mod session;

pub use route::Route;
pub use session::SessionFlow;
