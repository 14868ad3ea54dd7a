use crate::config::Config;
use crate::detector::interface::{Detection, Status};
use crate::device_camera::interface::DeviceCameraEvent;
use chrono::{DateTime, FixedOffset, Utc};
use std::time::Instant;

#[derive(Clone, Debug, PartialEq)]
pub enum AlertKind {
    Drowsy,
    Sleeping,
}

#[derive(Clone, Debug)]
pub struct AlertRecord {
    pub kind: AlertKind,
    pub at: DateTime<FixedOffset>,
}

/// Debounce state of the audible alarm. It only fires from `Armed`, then
/// sits in `Cooldown` until the cooldown elapses or an ACTIVE detection
/// silences it.
#[derive(Default, Clone, Debug, PartialEq)]
pub enum AlarmState {
    #[default]
    Unprimed,
    Armed,
    Cooldown {
        since: Instant,
    },
}

#[derive(Default, Clone)]
pub enum CameraState {
    #[default]
    Disconnected,
    Connected(Instant),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatusLine {
    Streaming,
    Detected(Status),
    Error(String),
}

impl StatusLine {
    pub fn text(&self) -> String {
        match self {
            StatusLine::Streaming => "Streaming...".to_string(),
            StatusLine::Detected(status) => status.to_string(),
            StatusLine::Error(message) => message.clone(),
        }
    }
}

#[derive(Clone)]
pub struct Session {
    pub status: StatusLine,
    pub annotated_frame: Option<Vec<u8>>,
    pub processing: bool,
    pub alarm: AlarmState,
    pub alerts: Vec<AlertRecord>,
    pub last_capture: Instant,
}

impl Session {
    fn starting() -> Self {
        Self {
            status: StatusLine::Streaming,
            annotated_frame: None,
            processing: true,
            alarm: AlarmState::Unprimed,
            alerts: Vec::new(),
            last_capture: Instant::now(),
        }
    }
}

#[derive(Clone)]
pub enum State {
    Connecting { camera: CameraState },
    Monitoring { session: Session },
}

impl State {
    pub fn to_display_string(&self) -> String {
        match self {
            State::Connecting { camera } => match camera {
                CameraState::Disconnected => "Connecting(camera disconnected)".to_string(),
                CameraState::Connected(_) => "Connecting(camera starting)".to_string(),
                CameraState::Failed(message) => format!("Connecting(camera failed: {})", message),
            },
            State::Monitoring { session } => format!(
                "Monitoring(status: {}, alerts: {}, processing: {})",
                session.status.text(),
                session.alerts.len(),
                session.processing
            ),
        }
    }
}

#[derive(Debug)]
pub enum Event {
    Tick(Instant),
    CameraEvent(DeviceCameraEvent),
    CameraStartDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    FrameCaptureDone(Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>),
    DetectDone(Result<Detection, Box<dyn std::error::Error + Send + Sync>>),
    AlarmPrimeDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::FrameCaptureDone(Ok(frame)) => {
                format!("FrameCaptureDone(Ok({} bytes))", frame.len())
            }
            Event::DetectDone(Ok(detection)) => format!("DetectDone(Ok({}))", detection.status),
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SubscribeCamera,
    SubscribeTick,
    StartCamera,
    CaptureFrame,
    Detect { frame: Vec<u8> },
    PrimeAlarm,
    SoundAlarm,
    SilenceAlarm,
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::Detect { frame } => format!("Detect({} bytes)", frame.len()),
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (State, Vec<Effect>) {
    (
        State::Connecting {
            camera: CameraState::default(),
        },
        vec![Effect::SubscribeCamera, Effect::SubscribeTick],
    )
}

pub fn transition(config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    match (state.clone(), event) {
        // Camera bring-up
        (State::Connecting { .. }, Event::CameraEvent(DeviceCameraEvent::Connected)) => (
            State::Connecting {
                camera: CameraState::Connected(Instant::now()),
            },
            vec![Effect::StartCamera],
        ),
        (State::Connecting { .. }, Event::CameraStartDone(Ok(()))) => (
            State::Monitoring {
                session: Session::starting(),
            },
            vec![Effect::PrimeAlarm, Effect::CaptureFrame],
        ),
        (State::Connecting { .. }, Event::CameraStartDone(Err(e))) => (
            State::Connecting {
                camera: CameraState::Failed(e.to_string()),
            },
            vec![],
        ),

        // Main loop
        (State::Monitoring { mut session }, Event::AlarmPrimeDone(Ok(()))) => {
            if session.alarm == AlarmState::Unprimed {
                session.alarm = AlarmState::Armed;
            }
            (State::Monitoring { session }, vec![])
        }
        (State::Monitoring { mut session }, Event::FrameCaptureDone(Ok(frame))) => {
            if frame.is_empty() {
                session.processing = false;
                (State::Monitoring { session }, vec![])
            } else {
                (State::Monitoring { session }, vec![Effect::Detect { frame }])
            }
        }
        (State::Monitoring { mut session }, Event::FrameCaptureDone(Err(e))) => {
            session.processing = false;
            session.status = StatusLine::Error(format!("Error: {}", e));
            (State::Monitoring { session }, vec![])
        }
        (State::Monitoring { session }, Event::DetectDone(Ok(detection))) => {
            handle_detection(config, session, detection)
        }
        (State::Monitoring { mut session }, Event::DetectDone(Err(e))) => {
            session.processing = false;
            session.status = StatusLine::Error(format!("Error: {}", e));
            (State::Monitoring { session }, vec![])
        }
        (State::Monitoring { mut session }, Event::Tick(now)) => {
            if let AlarmState::Cooldown { since } = session.alarm {
                if now.duration_since(since) >= config.alarm_cooldown {
                    session.alarm = AlarmState::Armed;
                }
            }

            let mut effects = vec![];
            if !session.processing
                && now.duration_since(session.last_capture) >= config.capture_rate
            {
                session.processing = true;
                session.last_capture = now;
                effects.push(Effect::CaptureFrame);
            }

            (State::Monitoring { session }, effects)
        }

        // Teardown: disconnect drops the whole session
        (_, Event::CameraEvent(DeviceCameraEvent::Disconnected)) => {
            let mut effects = vec![];
            if let State::Monitoring { session } = &state {
                if matches!(session.alarm, AlarmState::Cooldown { .. }) {
                    effects.push(Effect::SilenceAlarm);
                }
            }
            (
                State::Connecting {
                    camera: CameraState::Disconnected,
                },
                effects,
            )
        }

        // Default case
        _ => (state, vec![]),
    }
}

fn handle_detection(
    config: &Config,
    mut session: Session,
    detection: Detection,
) -> (State, Vec<Effect>) {
    session.processing = false;
    session.status = StatusLine::Detected(detection.status.clone());
    session.annotated_frame = Some(detection.annotated_png);

    let mut effects = vec![];

    match detection.status {
        Status::Sleeping | Status::Drowsy => {
            let kind = if detection.status == Status::Sleeping {
                AlertKind::Sleeping
            } else {
                AlertKind::Drowsy
            };
            session.alerts.insert(
                0,
                AlertRecord {
                    kind,
                    at: Utc::now().with_timezone(&config.logger_timezone),
                },
            );
            session.alerts.truncate(config.alert_history_limit);

            if session.alarm == AlarmState::Armed {
                session.alarm = AlarmState::Cooldown {
                    since: Instant::now(),
                };
                effects.push(Effect::SoundAlarm);
            }
        }
        Status::Active => {
            if matches!(session.alarm, AlarmState::Cooldown { .. }) {
                session.alarm = AlarmState::Armed;
                effects.push(Effect::SilenceAlarm);
            }
        }
        Status::NoFace | Status::Unknown(_) => {}
    }

    (State::Monitoring { session }, effects)
}
