use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// Attendance decision. `Pending` is the undecided starting state of the
/// form and can never be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Attendance {
    Attending,
    NotAttending,
    #[default]
    Pending,
}

impl Attendance {
    pub fn as_str(self) -> &'static str {
        match self {
            Attendance::Attending => "attending",
            Attendance::NotAttending => "not_attending",
            Attendance::Pending => "pending",
        }
    }

    pub fn is_decided(self) -> bool {
        !matches!(self, Attendance::Pending)
    }

    /// Lenient parse for values read back from storage: anything that is not
    /// a known decision is treated as undecided.
    pub fn from_stored(value: &str) -> Self {
        value.trim().parse().unwrap_or(Attendance::Pending)
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attendance {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attending" => Ok(Attendance::Attending),
            "not_attending" => Ok(Attendance::NotAttending),
            "pending" => Ok(Attendance::Pending),
            other => Err(DomainError::UnknownAttendance(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_attending_and_not_attending_are_decided() {
        assert!(Attendance::Attending.is_decided());
        assert!(Attendance::NotAttending.is_decided());
        assert!(!Attendance::Pending.is_decided());
    }

    #[test]
    fn stored_garbage_reads_as_pending() {
        assert_eq!(Attendance::from_stored(" attending "), Attendance::Attending);
        assert_eq!(Attendance::from_stored("yes"), Attendance::Pending);
        assert_eq!(Attendance::from_stored(""), Attendance::Pending);
    }

    #[test]
    fn strict_parse_rejects_unknown_values() {
        let err = "maybe".parse::<Attendance>().expect_err("unknown value");
        assert_eq!(err, DomainError::UnknownAttendance("maybe".to_string()));
    }
}
