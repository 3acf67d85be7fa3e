pub mod bank;

pub use bank::{BankError, ContentBank, QuipEntry, QuipTarget};
