pub mod request;
pub mod response;

pub use request::{
    FIELD_CODE, FIELD_FILE, FIELD_FORMAT, FIELD_LANGUAGE, FIELD_MODE, GENERATE_PATH,
    MAX_UPLOAD_BYTES,
};
pub use response::{FunctionDoc, GenerateResponse};
