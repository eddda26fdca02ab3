pub mod governance_router;
pub mod test_recipient;

pub use governance_router::MockGovernanceRouter;
pub use test_recipient::{MockTestRecipient, MockTestRecipientFactory};
