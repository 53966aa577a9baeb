use thiserror::Error;
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("snapshot surface must be non-empty, got {width}x{height}")]
    EmptySurface { width: u32, height: u32 },
    #[error("snapshot surface {width}x{height} is too large")]
    SurfaceTooLarge { width: u32, height: u32 },
    #[error("failed to draw snapshot: {0}")]
    Plot(String),
    #[error("failed to encode snapshot: {0}")]
    Encode(String),
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for ExportError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ExportError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for ExportError {
    fn from(value: image::ImageError) -> Self {
        ExportError::Encode(value.to_string())
    }
}
