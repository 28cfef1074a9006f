pub mod store;

pub use store::{MODIFICATION_LIMIT, ModifyOutcome, RosterStore};
