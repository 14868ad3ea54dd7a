use crate::config::Config;
use crate::detector::interface::{Detection, Detector, Status};
use crate::library::logger::interface::Logger;
use base64::Engine as _;
use rand::Rng;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Thin client of the remote detection endpoint: one multipart POST per
/// frame, JSON back.
pub struct DetectorHttp {
    endpoint: String,
    timeout: Duration,
    logger: Arc<dyn Logger + Send + Sync>,
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    status: String,
    image: String,
}

impl DetectorHttp {
    pub fn new(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            endpoint: config.detect_endpoint.clone(),
            timeout: config.detect_timeout,
            logger: logger.with_namespace("detector").with_namespace("http"),
        }
    }
}

fn multipart_body(boundary: &str, frame: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(frame.len() + 256);
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"image\"; filename=\"frame.png\"\r\n",
    );
    body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
    body.extend_from_slice(frame);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}

impl Detector for DetectorHttp {
    fn detect(&self, frame: &[u8]) -> Result<Detection, Box<dyn std::error::Error + Send + Sync>> {
        let boundary = format!("frame-boundary-{:016x}", rand::rng().random::<u64>());
        let body = multipart_body(&boundary, frame);

        let response = ureq::post(&self.endpoint)
            .timeout(self.timeout)
            .set(
                "Content-Type",
                &format!("multipart/form-data; boundary={}", boundary),
            )
            .send_bytes(&body)?;

        let parsed: DetectResponse = response.into_json()?;

        let annotated_png =
            base64::engine::general_purpose::STANDARD.decode(parsed.image.as_bytes())?;

        let _ = self
            .logger
            .info(&format!("Detection status: {}", parsed.status));

        Ok(Detection {
            status: Status::parse(&parsed.status),
            annotated_png,
        })
    }
}
