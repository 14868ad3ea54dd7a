#[cfg(test)]
mod core_test {

    use std::time::Instant;

    use crate::config::Config;
    use crate::detector::interface::{Detection, Status};
    use crate::device_camera::interface::DeviceCameraEvent;
    use crate::monitor::core::{
        init, transition, AlarmState, AlertKind, CameraState, Effect, Event, Session, State,
        StatusLine,
    };
    use crate::monitor::tests::fixture::Fixture;

    fn session() -> Session {
        Session {
            status: StatusLine::Streaming,
            annotated_frame: None,
            processing: false,
            alarm: AlarmState::Armed,
            alerts: vec![],
            last_capture: Instant::now(),
        }
    }

    fn monitoring(session: Session) -> State {
        State::Monitoring { session }
    }

    fn detection(status: Status) -> Event {
        Event::DetectDone(Ok(Detection {
            status,
            annotated_png: vec![1, 2, 3],
        }))
    }

    #[test]
    fn test_init() {
        let (state, effects) = init();

        assert!(matches!(state, State::Connecting { .. }));
        assert_eq!(effects.len(), 2);
        assert!(effects.contains(&Effect::SubscribeCamera));
        assert!(effects.contains(&Effect::SubscribeTick));
    }

    #[test]
    fn test_camera_connection_flow() {
        let config = Config::default();
        let (initial_state, _) = init();

        let (state, effects) = transition(
            &config,
            initial_state,
            Event::CameraEvent(DeviceCameraEvent::Connected),
        );

        match state.clone() {
            State::Connecting { camera } => {
                assert!(matches!(camera, CameraState::Connected(_)));
            }
            _ => panic!("Unexpected state"),
        }
        assert_eq!(effects, vec![Effect::StartCamera]);

        let (state, effects) = transition(&config, state, Event::CameraStartDone(Ok(())));

        match state {
            State::Monitoring { session } => {
                assert_eq!(session.status, StatusLine::Streaming);
                assert_eq!(session.alarm, AlarmState::Unprimed);
                assert!(session.processing);
                assert!(session.alerts.is_empty());
            }
            _ => panic!("Unexpected state"),
        }
        assert_eq!(effects, vec![Effect::PrimeAlarm, Effect::CaptureFrame]);
    }

    #[test]
    fn test_camera_start_failure_is_surfaced() {
        let config = Config::default();
        let (initial_state, _) = init();

        let (state, effects) = transition(
            &config,
            initial_state,
            Event::CameraStartDone(Err("no device".into())),
        );

        match state {
            State::Connecting { camera } => match camera {
                CameraState::Failed(message) => assert!(message.contains("no device")),
                _ => panic!("Unexpected camera state"),
            },
            _ => panic!("Unexpected state"),
        }
        assert!(effects.is_empty());
    }

    #[test]
    fn test_capture_feeds_detection() {
        let config = Config::default();

        let mut s = session();
        s.processing = true;
        let frame = vec![9u8, 9, 9];

        let (state, effects) = transition(
            &config,
            monitoring(s),
            Event::FrameCaptureDone(Ok(frame.clone())),
        );

        assert!(matches!(state, State::Monitoring { .. }));
        assert_eq!(effects, vec![Effect::Detect { frame }]);
    }

    #[test]
    fn test_empty_capture_ends_the_round() {
        let config = Config::default();

        let mut s = session();
        s.processing = true;

        let (state, effects) =
            transition(&config, monitoring(s), Event::FrameCaptureDone(Ok(vec![])));

        match state {
            State::Monitoring { session } => assert!(!session.processing),
            _ => panic!("Unexpected state"),
        }
        assert!(effects.is_empty());
    }

    #[test]
    fn test_alarm_prime_arms_the_alarm() {
        let config = Config::default();

        let mut s = session();
        s.alarm = AlarmState::Unprimed;

        let (state, effects) = transition(&config, monitoring(s), Event::AlarmPrimeDone(Ok(())));

        match state {
            State::Monitoring { session } => assert_eq!(session.alarm, AlarmState::Armed),
            _ => panic!("Unexpected state"),
        }
        assert!(effects.is_empty());
    }

    #[test]
    fn test_sleeping_detection_records_alert_and_sounds_alarm() {
        let config = Config::default();

        let (state, effects) = transition(&config, monitoring(session()), detection(Status::Sleeping));

        match state {
            State::Monitoring { session } => {
                assert_eq!(session.status, StatusLine::Detected(Status::Sleeping));
                assert_eq!(session.alerts.len(), 1);
                assert_eq!(session.alerts[0].kind, AlertKind::Sleeping);
                assert!(matches!(session.alarm, AlarmState::Cooldown { .. }));
                assert_eq!(session.annotated_frame, Some(vec![1, 2, 3]));
                assert!(!session.processing);
            }
            _ => panic!("Unexpected state"),
        }
        assert_eq!(effects, vec![Effect::SoundAlarm]);
    }

    #[test]
    fn test_drowsy_detection_records_drowsy_alert() {
        let config = Config::default();

        let (state, effects) = transition(&config, monitoring(session()), detection(Status::Drowsy));

        match state {
            State::Monitoring { session } => {
                assert_eq!(session.alerts[0].kind, AlertKind::Drowsy);
            }
            _ => panic!("Unexpected state"),
        }
        assert_eq!(effects, vec![Effect::SoundAlarm]);
    }

    #[test]
    fn test_alarm_debounce_blocks_repeat_sound() {
        let config = Config::default();

        let mut s = session();
        s.alarm = AlarmState::Cooldown {
            since: Instant::now(),
        };

        let (state, effects) = transition(&config, monitoring(s), detection(Status::Sleeping));

        match state {
            State::Monitoring { session } => {
                // Alert still recorded, but no second sound inside the cooldown
                assert_eq!(session.alerts.len(), 1);
                assert!(matches!(session.alarm, AlarmState::Cooldown { .. }));
            }
            _ => panic!("Unexpected state"),
        }
        assert!(effects.is_empty());
    }

    #[test]
    fn test_unprimed_alarm_never_sounds() {
        let config = Config::default();

        let mut s = session();
        s.alarm = AlarmState::Unprimed;

        let (state, effects) = transition(&config, monitoring(s), detection(Status::Sleeping));

        match state {
            State::Monitoring { session } => {
                assert_eq!(session.alerts.len(), 1);
                assert_eq!(session.alarm, AlarmState::Unprimed);
            }
            _ => panic!("Unexpected state"),
        }
        assert!(effects.is_empty());
    }

    #[test]
    fn test_active_detection_silences_alarm() {
        let config = Config::default();

        let mut s = session();
        s.alarm = AlarmState::Cooldown {
            since: Instant::now(),
        };

        let (state, effects) = transition(&config, monitoring(s), detection(Status::Active));

        match state {
            State::Monitoring { session } => {
                assert_eq!(session.alarm, AlarmState::Armed);
                assert!(session.alerts.is_empty());
            }
            _ => panic!("Unexpected state"),
        }
        assert_eq!(effects, vec![Effect::SilenceAlarm]);
    }

    #[test]
    fn test_cooldown_rearms_after_timeout() {
        let config = Config::default();

        let mut s = session();
        s.processing = true;
        s.alarm = AlarmState::Cooldown {
            since: Instant::now() - config.alarm_cooldown,
        };

        let (state, effects) = transition(&config, monitoring(s), Event::Tick(Instant::now()));

        match state {
            State::Monitoring { session } => assert_eq!(session.alarm, AlarmState::Armed),
            _ => panic!("Unexpected state"),
        }
        assert!(effects.is_empty());
    }

    #[test]
    fn test_alert_history_is_capped() {
        let config = Config::default();

        let mut state = monitoring(session());
        for _ in 0..config.alert_history_limit + 2 {
            let (next, _) = transition(&config, state, detection(Status::Drowsy));
            state = next;
        }
        let (state, _) = transition(&config, state, detection(Status::Sleeping));

        match state {
            State::Monitoring { session } => {
                assert_eq!(session.alerts.len(), config.alert_history_limit);
                // Newest first
                assert_eq!(session.alerts[0].kind, AlertKind::Sleeping);
            }
            _ => panic!("Unexpected state"),
        }
    }

    #[test]
    fn test_tick_waits_for_inflight_round() {
        let config = Config::default();

        let mut s = session();
        s.processing = true;
        s.last_capture = Instant::now() - config.capture_rate;

        let (_, effects) = transition(&config, monitoring(s), Event::Tick(Instant::now()));

        assert!(effects.is_empty());
    }

    #[test]
    fn test_tick_waits_for_capture_rate() {
        let config = Config::default();

        let s = session();

        let (_, effects) = transition(
            &config,
            monitoring(s),
            Event::Tick(Instant::now()),
        );

        assert!(effects.is_empty());
    }

    #[test]
    fn test_tick_starts_next_round() {
        let config = Config::default();

        let mut s = session();
        s.last_capture = Instant::now() - config.capture_rate;

        let (state, effects) = transition(&config, monitoring(s), Event::Tick(Instant::now()));

        match state {
            State::Monitoring { session } => assert!(session.processing),
            _ => panic!("Unexpected state"),
        }
        assert_eq!(effects, vec![Effect::CaptureFrame]);
    }

    #[test]
    fn test_detect_error_surfaces_as_status() {
        let config = Config::default();

        let mut s = session();
        s.processing = true;

        let (state, effects) =
            transition(&config, monitoring(s), Event::DetectDone(Err("boom".into())));

        match state {
            State::Monitoring { session } => {
                assert!(!session.processing);
                match session.status {
                    StatusLine::Error(message) => assert!(message.contains("boom")),
                    _ => panic!("Unexpected status"),
                }
            }
            _ => panic!("Unexpected state"),
        }
        assert!(effects.is_empty());
    }

    #[test]
    fn test_no_face_leaves_alarm_and_history_alone() {
        let config = Config::default();

        let (state, effects) = transition(&config, monitoring(session()), detection(Status::NoFace));

        match state {
            State::Monitoring { session } => {
                assert!(session.alerts.is_empty());
                assert_eq!(session.alarm, AlarmState::Armed);
                assert_eq!(session.status, StatusLine::Detected(Status::NoFace));
            }
            _ => panic!("Unexpected state"),
        }
        assert!(effects.is_empty());
    }

    #[test]
    fn test_camera_disconnect_resets_session() {
        let config = Config::default();

        let mut s = session();
        s.alarm = AlarmState::Cooldown {
            since: Instant::now(),
        };
        s.alerts.push(crate::monitor::core::AlertRecord {
            kind: AlertKind::Sleeping,
            at: chrono::Utc::now().with_timezone(&config.logger_timezone),
        });

        let (state, effects) = transition(
            &config,
            monitoring(s),
            Event::CameraEvent(DeviceCameraEvent::Disconnected),
        );

        match state {
            State::Connecting { camera } => {
                assert!(matches!(camera, CameraState::Disconnected));
            }
            _ => panic!("Unexpected state"),
        }
        assert_eq!(effects, vec![Effect::SilenceAlarm]);
    }

    #[test]
    fn test_camera_disconnect_with_quiet_alarm_is_silent() {
        let config = Config::default();

        let (_, effects) = transition(
            &config,
            monitoring(session()),
            Event::CameraEvent(DeviceCameraEvent::Disconnected),
        );

        assert!(effects.is_empty());
    }

    #[test]
    fn test_monitor_initial_model() {
        let fixture = Fixture::new();
        let model = fixture.monitor.model.lock().unwrap();
        assert!(matches!(*model, State::Connecting { .. }));
    }
}
