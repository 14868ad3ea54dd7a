use super::main::Monitor;
use crate::monitor::core::{Effect, Event};
use std::time::Instant;

impl Monitor {
    pub fn interpret_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("running effect: {}", effect.to_display_string()));

        match effect {
            Effect::SubscribeCamera => {
                let events = self.device_camera.events();
                while let Ok(event) = events.recv() {
                    self.send(Event::CameraEvent(event));
                }
            }
            Effect::SubscribeTick => loop {
                std::thread::sleep(self.config.tick_rate);
                self.send(Event::Tick(Instant::now()));
            },
            Effect::StartCamera => {
                let started = self.device_camera.start();
                self.send(Event::CameraStartDone(started));
            }
            Effect::CaptureFrame => {
                let frame = self.device_camera.capture_frame();
                self.send(Event::FrameCaptureDone(frame));
            }
            Effect::Detect { frame } => {
                let detection = self.detector.detect(&frame);
                self.send(Event::DetectDone(detection));
            }
            Effect::PrimeAlarm => {
                let primed = self.device_alarm.prime();
                self.send(Event::AlarmPrimeDone(primed));
            }
            Effect::SoundAlarm => {
                if let Err(e) = self.device_alarm.sound() {
                    let _ = self.logger.info(&format!("alarm error: {}", e));
                }
            }
            Effect::SilenceAlarm => {
                if let Err(e) = self.device_alarm.silence() {
                    let _ = self.logger.info(&format!("alarm error: {}", e));
                }
            }
        }
    }
}
