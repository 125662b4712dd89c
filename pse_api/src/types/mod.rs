mod meta;
pub use self::meta::ODataResponse;

mod crb_prog;
pub use self::crb_prog::CrbProgRow;
