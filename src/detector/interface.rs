use std::fmt;

/// Status labels produced by the detection endpoint. Labels we do not
/// recognize are carried through verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Active,
    Drowsy,
    Sleeping,
    NoFace,
    Unknown(String),
}

const ACTIVE_LABEL: &str = "ACTIVE";
const DROWSY_LABEL: &str = "DIZZY";
const SLEEPING_LABEL: &str = "SLEEPING !!!";
const NO_FACE_LABEL: &str = "NO FACE DETECTED";

impl Status {
    pub fn parse(label: &str) -> Self {
        match label {
            ACTIVE_LABEL => Status::Active,
            DROWSY_LABEL => Status::Drowsy,
            SLEEPING_LABEL => Status::Sleeping,
            NO_FACE_LABEL => Status::NoFace,
            other => Status::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Active => write!(f, "{}", ACTIVE_LABEL),
            Status::Drowsy => write!(f, "{}", DROWSY_LABEL),
            Status::Sleeping => write!(f, "{}", SLEEPING_LABEL),
            Status::NoFace => write!(f, "{}", NO_FACE_LABEL),
            Status::Unknown(label) => write!(f, "{}", label),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Detection {
    pub status: Status,
    pub annotated_png: Vec<u8>,
}

pub trait Detector: Send + Sync {
    fn detect(&self, frame: &[u8]) -> Result<Detection, Box<dyn std::error::Error + Send + Sync>>;
}
