use ledbar_core::{LedError, Result};
use serde::{Deserialize, Deserializer};

/// Highest 7-bit I2C address.
pub const MAX_ADDRESS: u8 = 0x7F;

/// Parse an I2C address written as `0x70` style hex or plain decimal.
pub fn parse_address(raw: &str) -> Result<u8> {
    let raw = raw.trim();
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    match parsed {
        Ok(addr) if addr <= MAX_ADDRESS => Ok(addr),
        _ => Err(LedError::Config(format!("'{raw}' is not a 7-bit I2C address"))),
    }
}

fn check_range(value: i64) -> Result<u8> {
    u8::try_from(value)
        .ok()
        .filter(|&addr| addr <= MAX_ADDRESS)
        .ok_or_else(|| LedError::Config(format!("{value:#x} is not a 7-bit I2C address")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAddress {
    Number(i64),
    Text(String),
}

/// `address = 0x61` and `address = "0x61"` both load; anything above
/// [`MAX_ADDRESS`] is rejected.
pub(crate) fn deserialize_address<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<RawAddress>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let addr = match raw {
        RawAddress::Number(n) => check_range(n),
        RawAddress::Text(s) => parse_address(&s),
    };
    addr.map(Some).map_err(serde::de::Error::custom)
}
