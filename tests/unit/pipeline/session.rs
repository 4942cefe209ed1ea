use super::*;

#[test]
fn lifecycle_advances_through_events() {
    let s0 = SessionState::Idle;
    let s1 = reduce(&s0, &SessionEvent::Started);
    assert!(matches!(
        s1,
        SessionState::Running {
            stage: Stage::Planning,
            ..
        }
    ));

    let s2 = reduce(&s1, &SessionEvent::StageEntered(Stage::RenderingFrames));
    let s3 = reduce(
        &s2,
        &SessionEvent::FrameRendered {
            done: 75,
            total: 150,
        },
    );
    match &s3 {
        SessionState::Running {
            stage,
            frames_done,
            frames_total,
        } => {
            assert_eq!(*stage, Stage::RenderingFrames);
            assert_eq!((*frames_done, *frames_total), (75, 150));
        }
        other => panic!("unexpected state {other:?}"),
    }

    assert_eq!(reduce(&s3, &SessionEvent::Completed), SessionState::Completed);
    assert_eq!(
        reduce(&s3, &SessionEvent::Failed("boom".to_owned())),
        SessionState::Failed("boom".to_owned())
    );
    assert_eq!(reduce(&s3, &SessionEvent::Cancelled), SessionState::Cancelled);
}

#[test]
fn reducer_is_pure() {
    let state = SessionState::Running {
        stage: Stage::Encoding,
        frames_done: 10,
        frames_total: 20,
    };
    let before = state.clone();
    let _ = reduce(&state, &SessionEvent::Completed);
    assert_eq!(state, before);
}

#[test]
fn progress_is_monotonic_across_the_pipeline() {
    let mut state = SessionState::Idle;
    let mut last = state.progress();

    let events = [
        SessionEvent::Started,
        SessionEvent::StageEntered(Stage::SynthesizingAudio),
        SessionEvent::StageEntered(Stage::RenderingFrames),
        SessionEvent::FrameRendered { done: 50, total: 150 },
        SessionEvent::FrameRendered { done: 150, total: 150 },
        SessionEvent::StageEntered(Stage::Encoding),
        SessionEvent::StageEntered(Stage::Finalizing),
        SessionEvent::Completed,
    ];
    for event in events {
        state = reduce(&state, &event);
        let p = state.progress();
        assert!(p >= last, "progress regressed: {last} -> {p} at {event:?}");
        assert!((0.0..=1.0).contains(&p));
        last = p;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn cancel_token_trips_checkpoints() {
    let token = CancelToken::new();
    token.checkpoint().unwrap();
    assert!(!token.is_cancelled());

    token.cancel();
    assert!(token.is_cancelled());
    assert!(matches!(
        token.checkpoint(),
        Err(ClipsynthError::Cancelled)
    ));

    // Clones share the flag.
    let clone = CancelToken::new();
    clone.cancel();
    let sibling = clone.clone();
    assert!(sibling.is_cancelled());
}
