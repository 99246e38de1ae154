/// Method identifier under which `Cache::store` is instrumented.
pub const STORE_METHOD: &str = "Cache.store";

/// Returns the key of the invocation counter for a method.
///
/// The counter lives directly under the method identifier.
pub fn counter_key(method: &str) -> String {
    method.to_string()
}

/// Returns the key of the list holding a method's rendered call arguments.
pub fn inputs_key(method: &str) -> String {
    format!("{}:inputs", method)
}

/// Returns the key of the list holding a method's rendered results.
pub fn outputs_key(method: &str) -> String {
    format!("{}:outputs", method)
}
