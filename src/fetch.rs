//! Downloading and normalizing submitted images.

use std::io::Cursor;
use std::time::Duration;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use reqwest::Client;

use crate::chat::ImageMime;
use crate::error::FetchError;

pub const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Image bytes ready to be attached to a chat request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime: ImageMime,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl EncodedImage {
    /// `data:` URL carrying the base64-encoded payload.
    pub fn data_url(&self) -> String {
        crate::backends::nvidia::data_url(self.mime, &self.bytes)
    }
}

/// Retrieves images over HTTP and re-encodes them as RGB JPEG.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: Client,
    timeout: Duration,
    jpeg_quality: u8,
    max_dimension: Option<u32>,
}

impl Default for ImageFetcher {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}

impl ImageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECONDS),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            max_dimension: None,
        }
    }

    /// Bound on the whole download.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// JPEG quality, clamped to 1..=100.
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    /// Downscale so that neither side exceeds `max`, keeping the aspect ratio.
    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = max.filter(|m| *m > 0);
        self
    }

    /// Downloads `url` and returns it as an RGB JPEG.
    pub async fn fetch_and_encode(&self, url: &str) -> Result<EncodedImage, FetchError> {
        let bytes = self.download(url).await?;
        log::debug!("fetched {} bytes from {}", bytes.len(), url);
        let decoded = image::load_from_memory(&bytes).map_err(|err| FetchError::Decode {
            url: url.to_string(),
            message: err.to_string(),
        })?;
        self.encode(decoded)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let http_error = |err: reqwest::Error| {
            if err.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    seconds: self.timeout.as_secs_f64(),
                }
            } else {
                FetchError::Http {
                    url: url.to_string(),
                    message: err.to_string(),
                }
            }
        };
        let resp = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(http_error)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.bytes().await.map_err(http_error)?;
        Ok(body.to_vec())
    }

    fn encode(&self, image: DynamicImage) -> Result<EncodedImage, FetchError> {
        let image = match self.max_dimension {
            Some(max) if image.width() > max || image.height() > max => {
                image.resize(max, max, FilterType::Triangle)
            }
            _ => image,
        };
        let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
        let mut bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut bytes), self.jpeg_quality);
        rgb.write_with_encoder(encoder)
            .map_err(|err| FetchError::Encode(err.to_string()))?;
        Ok(EncodedImage {
            mime: ImageMime::JPEG,
            bytes,
            width: rgb.width(),
            height: rgb.height(),
        })
    }
}
