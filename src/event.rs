//! Change events received from the ref-change feed

mod change_event;

pub use change_event::{ChangeEvent, DecodeError, REVISION_ABBREV_LEN};
