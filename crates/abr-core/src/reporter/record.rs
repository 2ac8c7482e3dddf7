/// Outcome category; each maps to its own directory under the data root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Success,
    Error,
}

impl Category {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
        }
    }
}

/// One job's outcome: the account fields to append to the category files.
/// Empty fields are skipped by the reporter, never written as blank lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeRecord {
    pub credential: String,
    pub proxy: String,
    pub token: String,
}

impl OutcomeRecord {
    /// Per-field destinations, in write order.
    pub(super) fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("credentials.txt", self.credential.as_str()),
            ("proxies.txt", self.proxy.as_str()),
            ("tokens.txt", self.token.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_dirs_are_disjoint() {
        assert_ne!(Category::Success.dir_name(), Category::Error.dir_name());
    }

    #[test]
    fn fields_keep_write_order() {
        let record = OutcomeRecord {
            credential: "0xabc".into(),
            proxy: "host:8080".into(),
            token: "tok".into(),
        };
        let fields = record.fields();
        assert_eq!(fields[0], ("credentials.txt", "0xabc"));
        assert_eq!(fields[1], ("proxies.txt", "host:8080"));
        assert_eq!(fields[2], ("tokens.txt", "tok"));
    }
}
