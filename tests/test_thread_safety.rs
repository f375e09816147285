//! Tests for concurrent use
//!
//! Conversion and evaluation keep their stacks local to each call, so arguments
//! can be evaluated from many threads without synchronization.

use argument_validator::{Argument, Evaluation, ValidatorConfig};
use std::sync::Arc;
use std::thread;

fn knights() -> Argument {
    let mut argument = Argument::new(["k", "m", "a"], ValidatorConfig::default()).unwrap();
    argument.add_premise("(k | m) > !a").unwrap();
    argument.add_premise("a | m").unwrap();
    argument.set_conclusion("a | !k").unwrap();
    argument
}

#[test]
fn test_concurrent_independent_arguments() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let evaluation = knights().evaluate().expect("Evaluation failed");
                println!("Thread {} found counterexample {:?}", i, evaluation.verdict.counterexample);
                evaluation
            })
        })
        .collect();

    let results: Vec<Evaluation> = handles
        .into_iter()
        .map(|h| h.join().expect("Thread panicked"))
        .collect();

    for evaluation in &results {
        assert_eq!(evaluation, &results[0]);
        assert_eq!(evaluation.verdict.counterexample, Some(6));
    }
}

#[test]
fn test_shared_argument_across_threads() {
    let argument = Arc::new(knights());
    let expected = argument.evaluate().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let argument = Arc::clone(&argument);
            thread::spawn(move || argument.evaluate().expect("Evaluation failed"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("Thread panicked"), expected);
    }
}

#[test]
fn test_argument_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Argument>();
    assert_send_sync::<Evaluation>();
}
