pub use context::*;
pub use deployed::*;
pub use deployer::*;
pub use governance_router::*;
pub use test_recipient::*;

mod context;
mod deployed;
mod deployer;
mod governance_router;
mod test_recipient;
