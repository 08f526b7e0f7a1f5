pub mod issue;
pub mod ledger;
pub mod projector;
pub mod room;
