pub mod dispatcher;

pub use dispatcher::{dispatch, dispatch_with};
