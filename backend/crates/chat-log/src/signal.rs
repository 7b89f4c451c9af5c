use std::fmt;

/// Reason a subscriber was woken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// The log gained entries
    NewData,
    /// The username roster changed
    RosterChanged,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewData => "new_data",
            Self::RosterChanged => "roster_changed",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
