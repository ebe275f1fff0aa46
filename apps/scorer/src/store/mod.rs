//! JSON-file persistence for match snapshots and the player roster.
//!
//! The domain never touches the filesystem; hosts call these stores after
//! every transition. A missing file reads back as "nothing saved yet".

mod error;
mod match_store;
mod player_store;

pub use error::StoreError;
pub use match_store::MatchStore;
pub use player_store::PlayerStore;
