//! Response decoder module
//!
//! # Overview
//!
//! Bodies are parsed into `serde_json::Value` and every model is then built
//! field by field through [`FieldReader`]. The upstream API encodes booleans,
//! enums and dates in its own way; each encoding has an explicit decoder here:
//!
//! - strict `"Y"`/`"N"` indicators fail on any other value
//! - tri-state indicators and interesting-activity codes never fail
//! - dates must match [`RFC1123Z`] exactly

mod decoders;
mod types;

pub use decoders::{
    decode_body, decode_date, decode_indicator, decode_interesting_code, decode_tri_state,
    FieldReader, RFC1123Z,
};
pub use types::{DecodeError, FromJson};
