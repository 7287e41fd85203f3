use std::io::Cursor;

use async_trait::async_trait;
use image::ImageReader;
use rxing::Exceptions;

use business::domain::product::errors::BarcodeReadError;
use business::domain::product::services::BarcodeReaderService;

/// Barcode reader backed by `rxing`, with every supported 1D and 2D
/// symbology enabled.
#[derive(Default)]
pub struct BarcodeReaderRxing;

impl BarcodeReaderRxing {
    pub fn new() -> Self {
        Self
    }

    /// Decodes the raster, converts it to 8-bit luma and returns the text of
    /// every symbol found.
    fn decode_symbols(image: &[u8]) -> Result<Vec<String>, BarcodeReadError> {
        let picture = ImageReader::new(Cursor::new(image))
            .with_guessed_format()
            .map_err(|_| BarcodeReadError::UnreadableImage)?
            .decode()
            .map_err(|_| BarcodeReadError::UnreadableImage)?;

        let luma = picture.to_luma8();
        let (width, height) = luma.dimensions();

        match rxing::helpers::detect_multiple_in_luma(luma.into_raw(), width, height) {
            Ok(results) => Ok(results
                .iter()
                .map(|result| result.getText().to_string())
                .collect()),
            Err(Exceptions::NotFoundException(_)) => Ok(vec![]),
            Err(_) => Err(BarcodeReadError::DecoderFailed),
        }
    }
}

#[async_trait]
impl BarcodeReaderService for BarcodeReaderRxing {
    async fn detect(&self, image: Vec<u8>) -> Result<Vec<String>, BarcodeReadError> {
        // A panic inside the decoder comes back as a JoinError.
        tokio::task::spawn_blocking(move || Self::decode_symbols(&image))
            .await
            .map_err(|_| BarcodeReadError::DecoderFailed)?
    }
}
