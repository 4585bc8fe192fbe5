// doc constants
pub const DOC_ID: &str = "_id";

// projection constants
pub const PROJECTION_INCLUDE: i64 = 1;
