mod constants;
mod sort_order;
mod value;

pub use constants::*;
pub use sort_order::*;
pub(crate) use value::wrap_items;
pub use value::Value;
