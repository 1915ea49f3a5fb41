//! error types

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// [`seat`](crate::ServiceQueue::seat) was called with no one in line.
    EmptyQueue,
    /// The buzzer was never issued, or it isn't in line right now.
    InvalidBuzzer,
}

/// Returned by [`seat`](crate::ServiceQueue::seat), [`kick_out`](crate::ServiceQueue::kick_out),
/// and [`take_bribe`](crate::ServiceQueue::take_bribe). The queue is unchanged whenever one of
/// these is returned.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) buzzer: Option<u32>,
}

impl Error {
    pub(crate) fn empty_queue() -> Self {
        Self {
            kind: ErrorKind::EmptyQueue,
            buzzer: None,
        }
    }

    pub(crate) fn invalid_buzzer(buzzer: u32) -> Self {
        Self {
            kind: ErrorKind::InvalidBuzzer,
            buzzer: Some(buzzer),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The buzzer that was rejected, for [`ErrorKind::InvalidBuzzer`].
    pub fn buzzer(&self) -> Option<u32> {
        self.buzzer
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut debug = f.debug_struct("Error");
        debug.field("kind", &self.kind);
        if let Some(buzzer) = self.buzzer {
            debug.field("buzzer", &buzzer);
        }
        debug.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.kind, self.buzzer) {
            (ErrorKind::EmptyQueue, _) => write!(f, "no one in line to seat"),
            (ErrorKind::InvalidBuzzer, Some(buzzer)) => {
                write!(f, "buzzer {} is not in line", buzzer)
            }
            (ErrorKind::InvalidBuzzer, None) => write!(f, "buzzer is not in line"),
        }
    }
}

impl std::error::Error for Error {}
