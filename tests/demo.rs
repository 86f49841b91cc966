use cadence::Scheduler;
use cadence::clock::{Clock, ManualClock, SystemClock};
use cadence::demo::{self, ASYNC_ANSWER, Answer, BASIC_ANSWER, FUTURE_ANSWER, Kind};
use cadence::task::{self, Step};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

type Answers = Rc<RefCell<Vec<(Answer, Duration)>>>;

/// Returns a sink recording each answer with the clock time it arrived at.
fn recorder<C: Clock>(answers: &Answers, clock: C, start: Instant) -> impl FnMut(Answer) + use<C> {
    let answers = answers.clone();

    move |answer| answers.borrow_mut().push((answer, clock.now() - start))
}

#[test]
fn test_three_tasks_finish_in_deadline_order() {
    let clock = ManualClock::new();
    let start = clock.now();
    let answers: Answers = Rc::default();
    let loop_ticks = Rc::new(RefCell::new(0u32));

    let ticks = loop_ticks.clone();
    let ticker = task::from_fn(clock.clone(), move |clock| {
        clock.advance(Duration::from_secs(1));
        *ticks.borrow_mut() += 1;

        if clock.now() >= start + Duration::from_secs(11) {
            Step::Completed(())
        } else {
            Step::Suspended
        }
    });

    Scheduler::builder()
        .task(demo::basic_task(
            "A",
            start + Duration::from_secs(10),
            clock.clone(),
            recorder(&answers, clock.clone(), start),
        ))
        .task(demo::future_task(
            "B",
            start + Duration::from_secs(5),
            clock.clone(),
            recorder(&answers, clock.clone(), start),
        ))
        .task(demo::async_task(
            "C",
            start + Duration::from_secs(3),
            clock.clone(),
            recorder(&answers, clock.clone(), start),
        ))
        .task(ticker)
        .build()
        .run_loop();

    let answers = answers.borrow();
    let emitted: Vec<_> = answers.iter().map(|(a, _)| (a.kind, a.value)).collect();

    assert_eq!(
        emitted,
        vec![
            (Kind::Async, ASYNC_ANSWER),
            (Kind::Future, FUTURE_ANSWER),
            (Kind::Basic, BASIC_ANSWER),
        ]
    );

    let at: Vec<_> = answers.iter().map(|(_, t)| *t).collect();
    assert_eq!(
        at,
        vec![
            Duration::from_secs(3),
            Duration::from_secs(5),
            Duration::from_secs(10),
        ]
    );

    assert_eq!(answers[0].0.label, "C");
    assert_eq!(answers[1].0.label, "B");
    assert_eq!(answers[2].0.label, "A");
    assert_eq!(*loop_ticks.borrow(), 11);
}

#[test]
fn test_three_tasks_on_the_system_clock() {
    let start = Instant::now();
    let answers: Answers = Rc::default();

    Scheduler::builder()
        .pacing(Duration::from_millis(1))
        .task(demo::basic_task(
            "A",
            start + Duration::from_millis(60),
            SystemClock,
            recorder(&answers, SystemClock, start),
        ))
        .task(demo::future_task(
            "B",
            start + Duration::from_millis(40),
            SystemClock,
            recorder(&answers, SystemClock, start),
        ))
        .task(demo::async_task(
            "C",
            start + Duration::from_millis(20),
            SystemClock,
            recorder(&answers, SystemClock, start),
        ))
        .build()
        .run_loop();

    assert!(start.elapsed() >= Duration::from_millis(60));

    let answers = answers.borrow();
    let kinds: Vec<_> = answers.iter().map(|(a, _)| a.kind).collect();
    assert_eq!(kinds, vec![Kind::Async, Kind::Future, Kind::Basic]);

    for ((answer, at), min) in answers.iter().zip([20, 40, 60]) {
        assert!(
            *at >= Duration::from_millis(min),
            "{answer} arrived after {at:?}, before its deadline"
        );
    }
}

#[test]
fn test_past_deadlines_complete_while_priming() {
    let clock = ManualClock::new();
    let start = clock.now();
    let answers: Answers = Rc::default();
    clock.advance(Duration::from_secs(1));

    Scheduler::builder()
        .task(demo::basic_task("A", start, clock.clone(), recorder(&answers, clock.clone(), start)))
        .task(demo::future_task("B", start, clock.clone(), recorder(&answers, clock.clone(), start)))
        .task(demo::async_task("C", start, clock.clone(), recorder(&answers, clock.clone(), start)))
        .build()
        .run_loop();

    let kinds: Vec<_> = answers.borrow().iter().map(|(a, _)| a.kind).collect();
    assert_eq!(kinds, vec![Kind::Basic, Kind::Future, Kind::Async]);
}
