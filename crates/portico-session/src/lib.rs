//! PORTICO Session Store
//!
//! Tab-scoped key/value persistence for the auth token, the post-logout
//! continuation target and ad-hoc view state. Entries survive view reloads
//! but not the end of the client process, and never expire on their own.

mod store;

pub use store::SessionStore;
