use thiserror::Error;
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("nothing to draw: {0}")]
    EmptyFrame(&'static str),
    #[error("chart size must be non-zero, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("failed to render chart: {0}")]
    Draw(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for ChartError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(format!("{value:?}"))
    }
}
