use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum TagError {
    /// Identifier outside the family domain. Out-of-range ids are rejected,
    /// never wrapped via modulo: a wrapped id renders a visually valid but
    /// semantically wrong marker.
    InvalidIdentifier(u16),

    /// Non-positive rows, columns, tag size, or an inverted id range.
    InvalidLayout(&'static str),

    /// The requested backend was not compiled into this build.
    MissingCapability(&'static str),

    /// The print backend failed to serialize the document.
    DocumentEncode,
}

impl Display for TagError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match *self {
            Self::InvalidIdentifier(id) => {
                write!(f, "identifier {id} outside the tag36h11 family (0-586)")
            }
            Self::InvalidLayout(detail) => write!(f, "invalid layout: {detail}"),
            Self::MissingCapability(backend) => {
                write!(f, "{backend} backend not available in this build")
            }
            Self::DocumentEncode => f.write_str("failed to encode print document"),
        }
    }
}

impl std::error::Error for TagError {}

pub type TagResult<T> = Result<T, TagError>;
