/// Anything with a name to show
pub trait Named {
    fn name(&self) -> &str;
}
