use crate::detector::interface::{Detection, Detector, Status};
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

/// Stands in for the remote endpoint when it is not running: random status,
/// input frame echoed back as the annotated image.
pub struct DetectorFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DetectorFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("detector").with_namespace("fake"),
        }
    }
}

impl Detector for DetectorFake {
    fn detect(&self, frame: &[u8]) -> Result<Detection, Box<dyn std::error::Error + Send + Sync>> {
        let statuses = [
            Status::Active,
            Status::Active,
            Status::Drowsy,
            Status::Sleeping,
            Status::NoFace,
        ];

        let mut rng = rand::rng();
        let index_dist = Uniform::new(0, statuses.len())?;
        let status = statuses[index_dist.sample(&mut rng)].clone();

        self.logger.info(&format!("Faked status: {}", status))?;

        Ok(Detection {
            status,
            annotated_png: frame.to_vec(),
        })
    }
}
