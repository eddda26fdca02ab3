pub use governance_router::*;
pub use test_recipient::*;

mod governance_router;
mod test_recipient;
