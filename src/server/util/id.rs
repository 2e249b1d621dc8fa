use chrono::Utc;

/// Generates a new store-assigned record identifier.
///
/// 24 lowercase hex characters: a 4 byte big-endian Unix timestamp followed by
/// 8 random bytes. Identifiers created in later seconds sort after earlier ones.
pub fn new_record_id() -> String {
    let timestamp = Utc::now().timestamp() as u32;
    let random: u64 = rand::random();

    format!("{:08x}{:016x}", timestamp, random)
}
