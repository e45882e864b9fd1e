//! Integration tests for the check-in wizard
//!
//! Drives full flows through `CheckInSession` with the mock transport:
//! selection, details, submission outcomes, and reset back to defaults.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use moodcheck::checkin::mocks::MockTransport;
use moodcheck::{
    CheckInEvent, CheckInMachine, CheckInSession, EmotionId, Step, FAILURE_MESSAGE,
    SUCCESS_MESSAGE,
};

fn session_with(transport: Arc<MockTransport>) -> CheckInSession {
    CheckInSession::new(Box::new(transport))
}

fn drive_to_details(session: &mut CheckInSession, emotion: EmotionId) {
    session.handle_event(CheckInEvent::SelectEmotion { emotion });
    session.handle_event(CheckInEvent::Continue);
    assert_eq!(session.machine().step(), Step::Details);
}

/// The spec scenario: Happy at 75 with one tag and notes, submitted over a
/// transport that acknowledges with OK.
#[tokio::test]
async fn test_successful_submission_flow() {
    let transport = Arc::new(MockTransport::new());
    let mut session = session_with(Arc::clone(&transport));

    session.handle_event(CheckInEvent::SelectEmotion {
        emotion: EmotionId::Happy,
    });
    session.handle_event(CheckInEvent::SetIntensity { value: 75 });
    session.handle_event(CheckInEvent::ToggleTag {
        tag: "Excited".to_string(),
    });
    session.handle_event(CheckInEvent::Continue);
    session.handle_event(CheckInEvent::UpdateNotes {
        text: "Got good news".to_string(),
    });

    let before = Utc::now();
    session.submit().await;
    let after = Utc::now();

    let sent = transport.sent_payloads();
    assert_eq!(sent.len(), 1);
    let payload = &sent[0];
    assert_eq!(payload.emotion, "Happy");
    assert_eq!(payload.intensity, 75);
    assert_eq!(payload.tags, vec!["Excited"]);
    assert_eq!(payload.notes, "Got good news");
    assert!(payload.timestamp >= before && payload.timestamp <= after);

    assert_eq!(session.machine().step(), Step::Success);
    assert_eq!(session.machine().message(), Some(SUCCESS_MESSAGE));
    assert!(!session.is_submitting());
}

/// The wire body carries exactly the five payload fields, with an ISO-8601
/// timestamp.
#[tokio::test]
async fn test_submitted_body_wire_format() {
    let transport = Arc::new(MockTransport::new());
    let mut session = session_with(Arc::clone(&transport));
    drive_to_details(&mut session, EmotionId::Happy);
    session.submit().await;

    let body = serde_json::to_value(&transport.sent_payloads()[0]).unwrap();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 5);
    for field in ["emotion", "intensity", "tags", "notes", "timestamp"] {
        assert!(object.contains_key(field), "missing field {field}");
    }
    let ts = body["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(ts).is_ok());
}

#[tokio::test]
async fn test_failed_submission_flow() {
    let transport = Arc::new(MockTransport::failing());
    let mut session = session_with(Arc::clone(&transport));
    drive_to_details(&mut session, EmotionId::Sad);

    session.submit().await;

    assert_eq!(transport.sent_count(), 1);
    assert_eq!(session.machine().step(), Step::Error);
    assert_eq!(session.machine().message(), Some(FAILURE_MESSAGE));
    assert!(!session.is_submitting());
}

/// Failure is always recoverable: reset returns to the exact initial state
/// and the wizard can run a fresh check-in.
#[tokio::test]
async fn test_reset_after_failure_allows_retry() {
    let transport = Arc::new(MockTransport::failing());
    let mut session = session_with(Arc::clone(&transport));
    drive_to_details(&mut session, EmotionId::Anxious);
    session.handle_event(CheckInEvent::UpdateNotes {
        text: "rough day".to_string(),
    });
    session.submit().await;
    assert_eq!(session.machine().step(), Step::Error);

    session.handle_event(CheckInEvent::Reset);
    assert_eq!(session.machine(), &CheckInMachine::new());

    transport.set_fail(false);
    drive_to_details(&mut session, EmotionId::Calm);
    session.submit().await;
    assert_eq!(session.machine().step(), Step::Success);
    assert_eq!(transport.sent_count(), 2);
}

#[tokio::test]
async fn test_reset_after_success_restores_defaults() {
    let transport = Arc::new(MockTransport::new());
    let mut session = session_with(Arc::clone(&transport));

    session.handle_event(CheckInEvent::SelectEmotion {
        emotion: EmotionId::Excited,
    });
    session.handle_event(CheckInEvent::SetIntensity { value: 100 });
    session.handle_event(CheckInEvent::ToggleTag {
        tag: "Thrilled".to_string(),
    });
    session.handle_event(CheckInEvent::Continue);
    session.submit().await;
    assert_eq!(session.machine().step(), Step::Success);

    session.handle_event(CheckInEvent::Reset);
    assert_eq!(session.machine(), &CheckInMachine::new());
}

/// Selecting emotion A, toggling two tags, then selecting emotion B clears
/// both tags; B's vocabulary is disjoint from A's.
#[tokio::test]
async fn test_switching_emotion_clears_tags_across_catalogs() {
    let transport = Arc::new(MockTransport::new());
    let mut session = session_with(Arc::clone(&transport));

    session.handle_event(CheckInEvent::SelectEmotion {
        emotion: EmotionId::Angry,
    });
    session.handle_event(CheckInEvent::ToggleTag {
        tag: "Irritated".to_string(),
    });
    session.handle_event(CheckInEvent::ToggleTag {
        tag: "Fed Up".to_string(),
    });
    assert_eq!(session.machine().selected_tags().len(), 2);

    session.handle_event(CheckInEvent::SelectEmotion {
        emotion: EmotionId::Happy,
    });
    assert!(session.machine().selected_tags().is_empty());

    // A's tags are not in B's vocabulary either.
    session.handle_event(CheckInEvent::ToggleTag {
        tag: "Irritated".to_string(),
    });
    assert!(session.machine().selected_tags().is_empty());
}

/// Back and skip both return to selection with the draft intact, and the
/// payload reflects edits made after coming back.
#[tokio::test]
async fn test_back_then_resubmit_keeps_edits() {
    let transport = Arc::new(MockTransport::new());
    let mut session = session_with(Arc::clone(&transport));
    drive_to_details(&mut session, EmotionId::Happy);
    session.handle_event(CheckInEvent::UpdateNotes {
        text: "first draft".to_string(),
    });

    session.handle_event(CheckInEvent::Back);
    assert_eq!(session.machine().step(), Step::Selection);
    session.handle_event(CheckInEvent::ToggleTag {
        tag: "Grateful".to_string(),
    });
    session.handle_event(CheckInEvent::Continue);
    session.submit().await;

    let payload = &transport.sent_payloads()[0];
    assert_eq!(payload.notes, "first draft");
    assert_eq!(payload.tags, vec!["Grateful"]);
}

#[tokio::test]
async fn test_submit_without_details_step_is_ignored() {
    let transport = Arc::new(MockTransport::new());
    let mut session = session_with(Arc::clone(&transport));
    session.handle_event(CheckInEvent::SelectEmotion {
        emotion: EmotionId::Calm,
    });

    // Still on the selection step.
    session.submit().await;
    assert_eq!(transport.sent_count(), 0);
    assert_eq!(session.machine().step(), Step::Selection);
}
