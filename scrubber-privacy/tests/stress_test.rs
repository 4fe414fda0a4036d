//! Privacy stress tests: shared-engine concurrency, volume, repeated passes
//! and edge-case inputs.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use scrubber_privacy::{BoundedAuditLog, PrivacyEngine};
use serde_json::{json, Value};

// ── Concurrency ───────────────────────────────────────────────────────────

#[test]
fn stress_concurrent_sanitization_on_shared_engine() {
    let engine = Arc::new(PrivacyEngine::new());
    let threads = 8;
    let calls_per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for i in 0..calls_per_thread {
                    let input = format!("user{t}x{i}@example.com filed a ticket");
                    let output = engine.sanitize_text(&input);
                    assert!(!output.contains("@example.com"), "{output}");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stats = engine.get_sanitization_stats();
    let summary = stats.summary().unwrap();
    assert_eq!(summary.total_sanitizations, threads * calls_per_thread);
    assert_eq!(summary.total_pii_detected, threads * calls_per_thread);
    assert_eq!(summary.replacement_map_size, threads * calls_per_thread);
}

#[test]
fn stress_registry_changes_during_sanitization() {
    let engine = Arc::new(PrivacyEngine::new());

    let writer = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for i in 0..100 {
                let id = format!("custom_{i}");
                engine.add_pattern(&id, &format!("zz{i}zz"), "[CUSTOM]", "internal");
                engine.remove_pattern(&id);
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..100 {
                    let output = engine.sanitize_text("Reach alice@example.com today");
                    assert!(output.starts_with("Reach [EMAIL_REDACTED]_"));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(engine.list_categories().len(), 11);
}

#[test]
fn stress_bounded_audit_log_under_contention() {
    let engine =
        Arc::new(PrivacyEngine::new().with_audit_sink(Arc::new(BoundedAuditLog::new(16))));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..100 {
                    engine.sanitize_text("Call 555-123-4567");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(engine.audit_events().len(), 16);
}

// ── Volume ────────────────────────────────────────────────────────────────

#[test]
fn stress_large_document() {
    let engine = PrivacyEngine::new();
    let line = "Ticket raised by alice@example.com from 10.0.0.1, callback 555-123-4567.\n";
    let document = line.repeat(2_000);

    let start = Instant::now();
    let output = engine.sanitize_text(&document);
    let elapsed = start.elapsed();

    assert!(!output.contains("alice@example.com"));
    assert!(!output.contains("10.0.0.1"));
    assert!(!output.contains("555-123-4567"));
    assert_eq!(output.lines().count(), 2_000);
    // Three distinct literals, however many times they occur.
    assert_eq!(engine.replacement_map_size(), 3);
    assert!(elapsed.as_secs() < 10, "took {elapsed:?}");
}

#[test]
fn stress_deeply_nested_structure() {
    let engine = PrivacyEngine::new();
    let mut value = json!("Reach alice@example.com");
    for depth in 0..64 {
        value = if depth % 2 == 0 {
            json!([value, depth])
        } else {
            json!({ "inner": value, "depth": depth })
        };
    }

    let out = engine.sanitize_value(&value);

    let mut cursor = &out;
    loop {
        match cursor {
            Value::Array(items) => cursor = &items[0],
            Value::Object(map) => cursor = &map["inner"],
            Value::String(s) => {
                assert!(s.starts_with("Reach [EMAIL_REDACTED]_"));
                break;
            }
            other => panic!("unexpected leaf {other}"),
        }
    }
}

// ── Repeated passes ───────────────────────────────────────────────────────

#[test]
fn stress_repeated_passes_are_stable() {
    let engine = PrivacyEngine::new();
    let input = "Contact John Doe at john.doe@example.com or 555-123-4567";
    let first = engine.sanitize_text(input);
    let mut current = first.clone();
    for _ in 0..10 {
        current = engine.sanitize_text(&current);
    }
    assert_eq!(current, first);
    assert_eq!(engine.replacement_map_size(), 3);
}

// ── Edge cases ────────────────────────────────────────────────────────────

#[test]
fn stress_edge_case_inputs() {
    let engine = PrivacyEngine::new();
    let inputs = [
        " ",
        "\n\n\t",
        "@",
        "...",
        "1.2.3",
        "http://",
        "eyJ",
        "password:",
        "東京 café",
        "a@b",
    ];
    for input in inputs {
        assert_eq!(engine.sanitize_text(input), input, "'{input}' was rewritten");
    }
}
