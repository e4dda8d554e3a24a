//! Utility functions

/// Trims every identifier, drops blanks and duplicates, keeps first-seen order.
pub fn normalize_identifiers<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for id in ids {
        let id = id.as_ref().trim();
        if !id.is_empty() && !out.iter().any(|seen| seen == id) {
            out.push(id.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_identifiers() {
        let ids = normalize_identifiers(["  alice", "bob", "", "alice", "   ", "carol "]);
        assert_eq!(ids, vec!["alice", "bob", "carol"]);
    }
}
