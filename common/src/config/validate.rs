/// Checked before a config is cached or written back to disk.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
