/// Port for reading single keys from the user's git configuration.
pub trait GitIdentity {
    /// Value of `key` (e.g. `user.name`), or `None` when unset.
    fn get(&self, key: &str) -> Option<String>;
}
