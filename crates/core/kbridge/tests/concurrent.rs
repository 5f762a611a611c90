//! Concurrent emitters share no buffer.
//!
//! Each thread emits lines of its own distinct content and length through
//! one shared sink and checks that every write it receives is exactly its
//! own line, in full or as its own prefix.

#![cfg(not(loom))]

use std::sync::Barrier;
use std::thread;

use kbridge::{BridgeError, KernelLogSink, LogBridge, LogLevel, SinkSlot};
use kbridge_test::{capture_write, last, reset, writes};

const THREADS: usize = 8;
const ROUNDS: usize = 200;
const MAX: usize = 48;

static SINK: KernelLogSink = KernelLogSink::new("capture48", MAX, capture_write);
static SHARED: SinkSlot = SinkSlot::new();

fn line_for(thread: usize, round: usize) -> String {
    // Lengths sweep across the limit so some rounds truncate.
    let tag = char::from(b'a' + u8::try_from(thread).unwrap());
    let len = (round * 7 + thread * 3) % (2 * MAX);
    format!("{thread}:{round}:{}", tag.to_string().repeat(len))
}

#[test]
fn no_cross_talk_between_threads() {
    // SAFETY: `capture_write` only touches thread-local state.
    unsafe { SHARED.register(&SINK) };
    let barrier = Barrier::new(THREADS);

    thread::scope(|s| {
        for t in 0..THREADS {
            let barrier = &barrier;
            s.spawn(move || {
                reset();
                let bridge: LogBridge<'static> = LogBridge::new(&SHARED);
                barrier.wait();
                for round in 0..ROUNDS {
                    let input = line_for(t, round);
                    let result = bridge.emit(LogLevel::Info, &input);
                    let line = last().unwrap().line;

                    if input.len() < MAX {
                        assert_eq!(result, Ok(()));
                        assert_eq!(line, input.as_bytes());
                    } else {
                        assert_eq!(result, Err(BridgeError::Truncated));
                        assert_eq!(line.len(), MAX - 1);
                        assert!(input.as_bytes().starts_with(&line));
                    }
                    assert_eq!(writes(), round + 1);
                }
            });
        }
    });
}

#[test]
fn global_slot_from_many_threads() {
    kbridge_test::install_global();

    thread::scope(|s| {
        for t in 0..THREADS {
            s.spawn(move || {
                reset();
                for round in 0..ROUNDS {
                    let input = format!("worker {t} round {round}");
                    assert_eq!(kbridge::emit(LogLevel::Warn, &input), Ok(()));
                    assert!(kbridge_test::last_is(LogLevel::Warn, input.as_bytes()));
                }
                assert_eq!(writes(), ROUNDS);
            });
        }
    });
}
