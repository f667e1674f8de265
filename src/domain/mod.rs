mod cpf;
mod entry;
mod ledger;
mod money;

pub use cpf::*;
pub use entry::*;
pub use ledger::*;
pub use money::*;
