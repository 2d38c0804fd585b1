/// Source of randomness for choosing the tongue-twister of a challenge.
pub trait PhrasePicker: Send + Sync {
    /// `phrases` is never empty.
    fn pick(&self, phrases: &[&'static str]) -> &'static str;
}
