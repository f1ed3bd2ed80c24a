use crate::constants::CHANNEL_BUFFER_SIZE;
use std::time::Duration;
use tokio::sync::mpsc;

/// One completed request as reported by a worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub duration: Duration,
    pub size: u64,
    pub code: u16,
}

impl Outcome {
    #[inline]
    pub fn new(duration: Duration, size: u64, code: u16) -> Self {
        Self {
            duration,
            size,
            code,
        }
    }

    /// Response class of this outcome, if its code is classifiable
    #[inline]
    pub fn class(&self) -> Option<ResponseClass> {
        ResponseClass::from_code(self.code)
    }
}

/// Status-code bucket a response is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseClass {
    /// [0, 300)
    Success,
    /// [300, 400)
    Redirect,
    /// [400, 500)
    ClientError,
    /// [500, 600)
    ServerError,
}

impl ResponseClass {
    pub const ALL: [ResponseClass; 4] = [
        ResponseClass::Success,
        ResponseClass::Redirect,
        ResponseClass::ClientError,
        ResponseClass::ServerError,
    ];

    /// Classify a status code. Codes of 600 and above belong to no class.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0..300 => Some(ResponseClass::Success),
            300..400 => Some(ResponseClass::Redirect),
            400..500 => Some(ResponseClass::ClientError),
            500..600 => Some(ResponseClass::ServerError),
            _ => None,
        }
    }

    /// Label used in the rendered report
    pub fn label(&self) -> &'static str {
        match self {
            ResponseClass::Success => "20X",
            ResponseClass::Redirect => "30X",
            ResponseClass::ClientError => "40X",
            ResponseClass::ServerError => "50X",
        }
    }
}

impl std::fmt::Display for ResponseClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Create the bounded channel workers push outcomes into.
///
/// The stream is closed once every sender has been dropped.
pub fn outcome_channel() -> (mpsc::Sender<Outcome>, mpsc::Receiver<Outcome>) {
    mpsc::channel(CHANNEL_BUFFER_SIZE)
}
