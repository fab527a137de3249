use std::fmt;

/// The three operations every record kind supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Put,
    Delete,
    Scan,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Put => "put",
            Operation::Delete => "delete",
            Operation::Scan => "scan",
        }
    }

    /// Verb used in "Unknown error while <verb>" messages.
    pub fn verb(&self) -> &'static str {
        match self {
            Operation::Put => "putting item",
            Operation::Delete => "deleting",
            Operation::Scan => "scanning",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
