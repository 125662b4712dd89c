mod common;
pub use self::common::{Query, QueryCommon};

mod crb_prog;
pub use self::crb_prog::{CrbProgField, CrbProgQuery};
