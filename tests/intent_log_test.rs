use std::fs;

use tui_simon::adapter::{IntentLog, IntentRecord, IntentWire, StatusWire, Tee};
use tui_simon::core::{GameSession, RecordingPresenter};
use tui_simon::types::{Symbol, ADVANCE_DELAY_MS, REVEAL_DELAY_MS};

#[test]
fn full_round_is_logged_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("simon.jsonl");

    let mut log = IntentLog::open(&path).unwrap();
    let mut session = GameSession::new(31);

    session.begin();
    session.flush_to(&mut log);
    session.tick(REVEAL_DELAY_MS);
    log.tick(REVEAL_DELAY_MS);
    session.flush_to(&mut log);

    let first = session.pattern()[0];
    let wrong = Symbol::ALL.into_iter().find(|s| *s != first).unwrap();
    session.submit_input(wrong);
    session.flush_to(&mut log);
    drop(log);

    let records: Vec<IntentRecord> = fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(records.first().unwrap().intent, IntentWire::ShowRoundContainer);
    assert_eq!(records[1].at_ms, REVEAL_DELAY_MS as u64);
    assert!(records.iter().any(|r| matches!(
        r.intent,
        IntentWire::ShowStatus {
            status: StatusWire::GameOver { score: 0 },
            ..
        }
    )));
    assert_eq!(
        records.last().unwrap().intent,
        IntentWire::ShowHighestScore { value: 0 }
    );
    let seqs: Vec<u64> = records.iter().map(|r| r.seq).collect();
    assert_eq!(seqs, (1..=records.len() as u64).collect::<Vec<_>>());
}

#[test]
fn log_appends_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("append.jsonl");

    for _ in 0..2 {
        let mut log = IntentLog::open(&path).unwrap();
        let mut session = GameSession::new(1);
        session.begin();
        session.flush_to(&mut log);
    }

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn tee_feeds_log_and_recorder_identically() {
    let mut log = IntentLog::new(Vec::new());
    let mut rec = RecordingPresenter::default();
    let mut session = GameSession::new(5);

    session.begin();
    session.tick(REVEAL_DELAY_MS);
    let first = session.pattern()[0];
    session.submit_input(first);
    session.tick(ADVANCE_DELAY_MS);
    session.flush_to(&mut Tee::new(&mut rec, &mut log));

    assert_eq!(log.written(), rec.intents.len() as u64);
    let bytes = log.into_inner().unwrap();
    let wires: Vec<IntentWire> = String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str::<IntentRecord>(l).unwrap().intent)
        .collect();
    let expected: Vec<IntentWire> = rec.intents.iter().map(IntentWire::from).collect();
    assert_eq!(wires, expected);
}
