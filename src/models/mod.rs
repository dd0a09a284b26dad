pub mod round;

pub use round::{Rejection, RejectionKind, RoundState, Submission};
