// File: crates/perfchart-core/src/target.rs
// Summary: Render target provider; resolves drawing surfaces by id.

use skia_safe as skia;

use crate::error::ChartError;

/// Resolves a drawing surface by id.
///
/// Stands in for the document the dashboard queries for its canvas, so chart
/// construction can be exercised without a live rendering environment.
pub trait TargetProvider {
    fn surface(&mut self, id: &str) -> Result<&mut skia::Surface, ChartError>;
}

/// In-memory provider backed by named CPU raster surfaces.
pub struct RasterTargets {
    targets: Vec<(String, skia::Surface)>,
}

impl RasterTargets {
    pub fn new() -> Self {
        Self { targets: Vec::new() }
    }

    /// Register a fresh raster surface under `id`, replacing any existing one.
    pub fn insert(&mut self, id: impl Into<String>, width: i32, height: i32) -> Result<(), ChartError> {
        let id = id.into();
        let surface = skia::surfaces::raster_n32_premul((width, height)).ok_or(ChartError::Surface)?;
        self.targets.retain(|(name, _)| *name != id);
        self.targets.push((id, surface));
        Ok(())
    }

    /// Snapshot the surface under `id` and encode it as PNG bytes.
    pub fn encode_png(&mut self, id: &str) -> Result<Vec<u8>, ChartError> {
        let surface = self.surface(id)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }
}

impl Default for RasterTargets {
    fn default() -> Self { Self::new() }
}

impl TargetProvider for RasterTargets {
    fn surface(&mut self, id: &str) -> Result<&mut skia::Surface, ChartError> {
        self.targets
            .iter_mut()
            .find(|(name, _)| name.as_str() == id)
            .map(|(_, surface)| surface)
            .ok_or_else(|| ChartError::TargetNotFound(id.to_string()))
    }
}
