pub mod account;
pub mod enums;
pub mod flag;
pub mod message;
pub mod status;

pub use account::{Account, AccountView};
pub use enums::AccountType;
pub use flag::{FlagRecord, FlaggedPatient};
pub use message::Message;
pub use status::StatusEntry;
