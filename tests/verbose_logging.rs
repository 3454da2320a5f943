//! Trace records for matrix construction and the direct offset switch.
#![cfg(feature = "verbose-logging")]

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;
use walshkit::{matrix_wht, Direction, DirectWalsh, WalshTransform};

struct Capture(Mutex<Vec<(Level, String)>>);

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.0
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

fn traces() -> Vec<String> {
    CAPTURE
        .0
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Trace)
        .map(|(_, msg)| msg.clone())
        .collect()
}

#[test]
fn construction_detail_is_traced() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    matrix_wht(&[1.0f64; 8], Direction::Forward).unwrap();
    let kron: Vec<_> = traces()
        .into_iter()
        .filter(|m| m.starts_with("hadamard: kron step"))
        .collect();
    assert_eq!(kron, vec!["hadamard: kron step 1 -> 4x4", "hadamard: kron step 2 -> 8x8"]);

    DirectWalsh::new().forward(&[1.0f64; 128]).unwrap();
    assert!(!traces().iter().any(|m| m.starts_with("direct walsh: default offset")));
    DirectWalsh::new().forward(&[1.0f64; 256]).unwrap();
    assert!(traces()
        .iter()
        .any(|m| m.starts_with("direct walsh: default offset 0.005 outside (0, 1/256)")));
}
