use crate::config::Config;
use crate::detector::interface::Detector;
use crate::device_alarm::interface::DeviceAlarm;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use crate::monitor::core::{init, Event, State};
use crate::monitor::render::Render;
use std::sync::mpsc::{channel, Receiver, RecvError, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Monitor {
    pub model: Arc<Mutex<State>>,
    pub event_sender: Sender<Event>,
    pub event_receiver: Arc<Mutex<Receiver<Event>>>,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub device_alarm: Arc<dyn DeviceAlarm + Send + Sync>,
    pub detector: Arc<dyn Detector + Send + Sync>,
    pub render: Render,
}

impl Monitor {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_alarm: Arc<dyn DeviceAlarm + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        detector: Arc<dyn Detector + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let initial = init();
        let render = Render::new(device_display, config.clone());

        Self {
            config,
            logger,
            device_camera,
            device_alarm,
            detector,
            render,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            model: Arc::new(Mutex::new(initial.0)),
        }
    }

    pub fn send(&self, event: Event) {
        let _ = self.event_sender.send(event);
    }

    pub fn recv(&self) -> Result<Event, RecvError> {
        self.event_receiver.lock().unwrap().recv()
    }
}
