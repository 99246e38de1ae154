mod error;
mod keys;
mod range;
mod traits;
mod value;

pub use error::{CacheError, Result};
pub use keys::{counter_key, inputs_key, outputs_key, STORE_METHOD};
pub use range::list_range;
pub use traits::BackingStore;
pub use value::{Key, StoredValue};
