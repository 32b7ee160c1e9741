mod request;
pub use self::request::{SessionDetailsRequest, VerifyRequest};

mod result;
pub use self::result::CallResult;
