#![allow(missing_docs)]
#![allow(clippy::all)]

use ethers::contract::abigen;

abigen!(
    IGovernanceRouter,
    r#"[
        function recoveryActiveAt() external view returns (uint256)
    ]"#
);

abigen!(
    ITestRecipient,
    r#"[
        function interchainSecurityModule() external view returns (address)
        function setInterchainSecurityModule(address _ism) external
    ]"#
);
