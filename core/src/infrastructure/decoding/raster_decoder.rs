use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_recognition::{entities::DecodedImage, ports::ImageDecoder},
};

/// Decodes PNG and JPEG payloads with the `image` crate.
///
/// Decoding runs on the blocking pool so large photos do not stall the
/// runtime.
#[derive(Debug, Clone, Default)]
pub struct RasterImageDecoder;

impl RasterImageDecoder {
    pub fn new() -> Self {
        Self
    }

    fn decode_blocking(image_data: &[u8]) -> Result<DecodedImage, CoreError> {
        if image_data.is_empty() {
            return Err(CoreError::ImageDecode("image payload is empty".to_string()));
        }

        let decoded = image::load_from_memory(image_data)
            .map_err(|e| CoreError::ImageDecode(e.to_string()))?;
        let rgb = decoded.to_rgb8();

        if rgb.width() == 0 || rgb.height() == 0 {
            return Err(CoreError::ImageDecode("image has no pixels".to_string()));
        }

        Ok(DecodedImage::new(rgb.width(), rgb.height(), rgb.into_raw()))
    }
}

impl ImageDecoder for RasterImageDecoder {
    async fn decode(&self, image_data: Vec<u8>) -> Result<DecodedImage, CoreError> {
        let size = image_data.len();

        let image = tokio::task::spawn_blocking(move || Self::decode_blocking(&image_data))
            .await
            .map_err(|e| {
                error!("Image decode task failed: {}", e);
                CoreError::InternalServerError
            })??;

        debug!(
            bytes = size,
            width = image.width,
            height = image.height,
            "image decoded"
        );

        Ok(image)
    }
}
