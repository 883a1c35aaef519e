use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "GSTIN", alias = "gstNumber")]
    pub gstin: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl Vendor {
    /// `true` when no GSTIN is recorded or the recorded one is well-formed.
    #[must_use]
    pub fn gstin_ok(&self) -> bool {
        self.gstin
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .is_none_or(is_valid_gstin)
    }
}

/// Check the shape of an Indian GSTIN.
///
/// Fifteen characters: a two-digit state code, a ten-character PAN
/// (five letters, four digits, one letter), an entity digit or letter
/// other than `0`, the literal `Z`, and a check character. The check
/// character itself is not verified.
#[must_use]
pub fn is_valid_gstin(raw: &str) -> bool {
    let g = raw.trim().to_ascii_uppercase();
    let b = g.as_bytes();
    if b.len() != 15 {
        return false;
    }
    let state_ok = b[0].is_ascii_digit() && b[1].is_ascii_digit() && &b[0..2] != b"00";
    let pan_ok = b[2..7].iter().all(u8::is_ascii_uppercase)
        && b[7..11].iter().all(u8::is_ascii_digit)
        && b[11].is_ascii_uppercase();
    let entity_ok = b[12].is_ascii_alphanumeric() && b[12] != b'0';
    state_ok && pan_ok && entity_ok && b[13] == b'Z' && b[14].is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("27AAPFU0939F1ZV")]
    #[case("29aabcu9603r1zm")]
    #[case(" 07AAACB2894G1ZP ")]
    fn accepts_well_formed_gstin(#[case] raw: &str) {
        assert!(is_valid_gstin(raw));
    }

    #[rstest]
    #[case("")]
    #[case("27AAPFU0939F1Z")]
    #[case("00AAPFU0939F1ZV")]
    #[case("27AAPF10939F1ZV")]
    #[case("27AAPFU0939F0ZV")]
    #[case("27AAPFU0939F1XV")]
    fn rejects_malformed_gstin(#[case] raw: &str) {
        assert!(!is_valid_gstin(raw));
    }

    #[test]
    fn vendor_without_gstin_is_ok() {
        let vendor: Vendor =
            serde_json::from_str(r#"{"_id":"v-1","name":"Local supplier"}"#).unwrap();
        assert!(vendor.gstin_ok());
        let vendor: Vendor =
            serde_json::from_str(r#"{"_id":"v-2","name":"Bad","GSTIN":"1234"}"#).unwrap();
        assert!(!vendor.gstin_ok());
    }
}
