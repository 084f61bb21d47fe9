use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lifecycle of an absence request as encoded by the backend `estado` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Unknown(i16),
}

impl RequestStatus {
    pub fn from_code(code: i16) -> Self {
        match code {
            1 => Self::Pending,
            2 => Self::Approved,
            3 => Self::Rejected,
            4 => Self::Cancelled,
            other => Self::Unknown(other),
        }
    }

    pub fn code(self) -> i16 {
        match self {
            Self::Pending => 1,
            Self::Approved => 2,
            Self::Rejected => 3,
            Self::Cancelled => 4,
            Self::Unknown(code) => code,
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Pending => "pendiente".into(),
            Self::Approved => "aprobado".into(),
            Self::Rejected => "rechazado".into(),
            Self::Cancelled => "cancelado".into(),
            Self::Unknown(code) => format!("desconocido({})", code),
        }
    }

    /// Only pending requests can be edited, cancelled or decided.
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }
}

impl Serialize for RequestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i16(self.code())
    }
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i16::deserialize(deserializer).map(Self::from_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_backend_codes() {
        assert_eq!(RequestStatus::from_code(1), RequestStatus::Pending);
        assert_eq!(RequestStatus::from_code(4).label(), "cancelado");
        assert_eq!(RequestStatus::from_code(9).label(), "desconocido(9)");
        assert_eq!(RequestStatus::Unknown(9).code(), 9);
        assert!(RequestStatus::Pending.is_pending());
        assert!(!RequestStatus::Approved.is_pending());
    }

    #[test]
    fn serializes_as_integer() {
        let status: RequestStatus = serde_json::from_str("3").unwrap();
        assert_eq!(status, RequestStatus::Rejected);
        assert_eq!(serde_json::to_string(&RequestStatus::Pending).unwrap(), "1");
    }
}
