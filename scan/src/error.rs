use image::ColorType;

/// Errors of scanner selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// There is no byte scanner for images of this color type.
    ///
    /// A [`GenericScanner`](crate::GenericScanner) works for any image, at the cost of comparing
    /// each pixel individually.
    #[error("no byte scanner for {0:?} images")]
    UnsupportedFormat(ColorType),
}
