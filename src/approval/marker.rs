/// Literal marker identifying an approval output
pub const APPROVAL_MARKER: &str = "APPROVE";

/// Position of the update txid in the decoded output text
pub const APPROVAL_TXID_OFFSET: usize = 10;

pub const TXID_HEX_LEN: usize = 64;

/// Decode a locking script's bytes as 7-bit ASCII, one character per byte
///
/// The high bit of each byte is cleared so opcodes and length bytes never shift
/// character offsets. Returns None for malformed hex.
pub fn decode_op_return(script_hex: &str) -> Option<String> {
    let bytes = hex::decode(script_hex).ok()?;
    Some(bytes.iter().map(|&b| (b & 0x7f) as char).collect())
}

/// Extract the approved update txid from decoded output text
///
/// Returns None when the text carries no marker. The txid is the 64 characters at
/// [`APPROVAL_TXID_OFFSET`], or whatever remains if the text is shorter.
pub fn parse_approval(text: &str) -> Option<String> {
    if !text.contains(APPROVAL_MARKER) {
        return None;
    }

    Some(
        text.chars()
            .skip(APPROVAL_TXID_OFFSET)
            .take(TXID_HEX_LEN)
            .collect(),
    )
}

/// True for a 64 character hex string
pub fn is_txid(value: &str) -> bool {
    value.len() == TXID_HEX_LEN && value.chars().all(|c| c.is_ascii_hexdigit())
}
