use kar_core::status::Status;

/// Parse a status argument, accepting every spelling the vocabulary knows.
///
/// Unlike inbound data, a typo here is an error rather than `draft`.
pub fn parse_status(raw: &str) -> anyhow::Result<Status> {
    Status::recognize(raw).ok_or_else(|| {
        let known = Status::ALL
            .iter()
            .map(|status| status.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::anyhow!("invalid status '{raw}': expected one of {known}")
    })
}
