// Runs in its own binary so the shared directory is still uninitialized
// when the threads race for it.
use dialpick_core::prelude::*;
use std::sync::{Arc, Barrier};

#[test]
fn racing_first_access_publishes_one_directory() {
    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            std::thread::spawn(move || {
                barrier.wait();
                Directory::shared().unwrap()
            })
        })
        .collect();
    let all: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(all.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    assert_eq!(all[0].lookup_by_code("RU").dial_prefix(), "7");
}
