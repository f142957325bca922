use crate::Float;

pub trait Kernel {
    // Filter coefficients, centered on the middle element
    fn kernel(&self) -> &[Float];
    // Number of elements on either side of the center
    fn radius(&self) -> usize {
        (self.kernel().len()-1)/2
    }

    fn normalizing_constant(&self) -> Float;
}
