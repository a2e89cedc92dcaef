use ethers::{types::Address, utils::to_checksum};

/// Full EIP-55 form of `address`.
///
/// note that the `Display` impl of `Address` truncates it to `0x1234…abcd`.
pub fn format_address(address: &Address) -> String {
    to_checksum(address, None)
}

/// Strip an optional `0x` prefix and decode the remaining hex.
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let hex_str = hex_str.trim().trim_start_matches("0x");
    hex::decode(hex_str)
}
