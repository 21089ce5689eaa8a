/// Generation seam: a layer turns an input record into an owned output.
pub trait Layer<I, O> {
    fn generate(&self, input: I) -> O;
}
