//! In-memory repositories.
//!
//! Each table is owned by a store type behind a `std::sync::RwLock` with
//! explicit per-entity operations; writers serialize per table. Handlers
//! never hold a guard across an await.

mod bins;
mod transactions;
mod users;

pub use bins::BinStore;
pub use transactions::TransactionStore;
pub use users::UserStore;
