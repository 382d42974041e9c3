pub trait Attributable {
    // returns the names of the attributes of this struct
    // returns: attribute names, one per column
    fn attribute_names() -> Vec<&'static str>;

    // returns this object's values in a corresponding format to attribute_names
    // returns: attribute values, one per column
    fn attribute_values(&self) -> Vec<String>;
}

#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    #[error("invalid range: {lower} is not below {upper}")]
    InvalidRange {
        lower: String,
        upper: String
    },

    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to write roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
}

impl RosterError {
    pub fn invalid_range<T: std::fmt::Display>(lower: T, upper: T) -> RosterError {
        RosterError::InvalidRange {
            lower: lower.to_string(),
            upper: upper.to_string()
        }
    }
}

// io::Error and csv::Error have no PartialEq
impl PartialEq for RosterError {
    fn eq(&self, other: &RosterError) -> bool {
        use RosterError::*;
        match (self, other) {
            (InvalidRange{lower: l1, upper: u1}, InvalidRange{lower: l2, upper: u2}) => {
                l1 == l2 && u1 == u2
            },
            (DateOutOfRange(a), DateOutOfRange(b)) => a == b,
            (InvalidArgument(a), InvalidArgument(b)) => a == b,
            (Io(a), Io(b)) => a.kind() == b.kind(),
            (Csv(a), Csv(b)) => a.to_string() == b.to_string(),
            _ => false
        }
    }
}
