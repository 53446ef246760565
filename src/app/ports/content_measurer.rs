use colfit_domain::MeasuredSizes;

/// Measures the desired width of a column's content.
///
/// Implementations must return finite, non-negative sizes.
pub trait ContentMeasurer {
    fn measure(&self, header: &str, cells: &[&str]) -> MeasuredSizes;
}
