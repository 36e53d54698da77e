#![allow(clippy::unwrap_used)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{runtime, song, ScriptedService, Step, WAIT};
use songfeed_app::{FeedViewModel, SongRepository};
use songfeed_core::{Resource, Status};
use tokio::sync::Notify;

#[test]
fn successful_load_is_loading_then_success_in_order() {
    let rt = runtime();
    let songs = vec![song("1", "One"), song("2", "Two"), song("3", "Three")];
    let (service, _) = ScriptedService::new(vec![Step::songs(songs.clone())]);
    let mut vm = FeedViewModel::new(SongRepository::new(service), rt.handle().clone());
    let observer = vm.observe();

    vm.get_songs();
    assert!(vm.pump_timeout(WAIT));

    assert_eq!(
        observer.drain(),
        vec![Resource::Loading, Resource::Success(songs)]
    );
}

#[test]
fn empty_feed_is_success() {
    let rt = runtime();
    let (service, _) = ScriptedService::new(vec![Step::songs(Vec::new())]);
    let mut vm = FeedViewModel::new(SongRepository::new(service), rt.handle().clone());
    let observer = vm.observe();

    vm.get_songs();
    assert!(vm.pump_timeout(WAIT));

    let states = observer.drain();
    assert_eq!(states.len(), 2);
    assert_eq!(states[1].status(), Status::Success);
    assert_eq!(states[1].data(), Some(&Vec::new()));
}

#[test]
fn failed_load_is_loading_then_error_message() {
    let rt = runtime();
    let (service, _) = ScriptedService::new(vec![Step::fail("timeout")]);
    let mut vm = FeedViewModel::new(SongRepository::new(service), rt.handle().clone());
    let observer = vm.observe();

    vm.get_songs();
    assert!(vm.pump_timeout(WAIT));

    assert_eq!(
        observer.drain(),
        vec![Resource::Loading, Resource::error("timeout")]
    );
}

#[test]
fn every_published_state_holds_payload_only_on_success() {
    let rt = runtime();
    let (service, _) = ScriptedService::new(vec![
        Step::songs(vec![song("1", "One")]),
        Step::fail("boom"),
        Step::songs(Vec::new()),
    ]);
    let mut vm = FeedViewModel::new(SongRepository::new(service), rt.handle().clone());
    let observer = vm.observe();

    for _ in 0..3 {
        vm.get_songs();
        assert!(vm.pump_timeout(WAIT));
    }

    for state in observer.drain() {
        assert_eq!(state.data().is_some(), state.status() == Status::Success);
    }
}

#[test]
fn sequential_loads_are_independent() {
    let rt = runtime();
    let first = vec![song("a", "A"), song("b", "B")];
    let second = vec![song("c", "C")];
    let (service, _) = ScriptedService::new(vec![
        Step::songs(first.clone()),
        Step::fail("offline"),
        Step::songs(second.clone()),
    ]);
    let mut vm = FeedViewModel::new(SongRepository::new(service), rt.handle().clone());
    let observer = vm.observe();

    for _ in 0..3 {
        vm.get_songs();
        assert!(vm.pump_timeout(WAIT));
    }

    let states = observer.drain();
    assert_eq!(states.len(), 6);
    assert_eq!(states[0], Resource::Loading);
    assert_eq!(states[1], Resource::Success(first));
    assert_eq!(states[2], Resource::Loading);
    assert_eq!(states[3].message(), Some("offline"));
    assert_eq!(states[4], Resource::Loading);
    assert_eq!(states[5], Resource::Success(second));
}

#[test]
fn overlapping_loads_latest_call_wins() {
    let rt = runtime();
    let gate = Arc::new(Notify::new());
    let stale = vec![song("old", "Old")];
    let fresh = vec![song("new", "New")];
    let (service, entered) = ScriptedService::new(vec![
        Step::songs(stale).gated(Arc::clone(&gate)),
        Step::songs(fresh.clone()),
    ]);
    let mut vm = FeedViewModel::new(SongRepository::new(service), rt.handle().clone());
    let observer = vm.observe();

    vm.get_songs();
    // First call is now parked inside the service.
    assert_eq!(entered.recv_timeout(WAIT).unwrap(), 0);

    vm.get_songs();
    assert!(vm.pump_timeout(WAIT));

    // Releasing the first call must not publish anything.
    gate.notify_one();
    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(vm.pump(), 0);

    assert_eq!(
        observer.drain(),
        vec![Resource::Loading, Resource::Loading, Resource::Success(fresh)]
    );
}

#[test]
fn observer_registered_late_sees_current_state() {
    let rt = runtime();
    let songs = vec![song("1", "One")];
    let (service, _) = ScriptedService::new(vec![Step::songs(songs.clone())]);
    let mut vm = FeedViewModel::new(SongRepository::new(service), rt.handle().clone());

    vm.get_songs();
    assert!(vm.pump_timeout(WAIT));

    let observer = vm.observe();
    assert_eq!(observer.drain(), vec![Resource::Success(songs)]);
}

#[test]
fn dropping_view_model_cancels_load() {
    let rt = runtime();
    let gate = Arc::new(Notify::new());
    let (service, entered) =
        ScriptedService::new(vec![Step::songs(vec![song("1", "One")]).gated(Arc::clone(&gate))]);
    let mut vm = FeedViewModel::new(SongRepository::new(service), rt.handle().clone());
    let observer = vm.observe();

    vm.get_songs();
    entered.recv_timeout(WAIT).unwrap();
    drop(vm);
    gate.notify_one();

    assert_eq!(observer.next_timeout(WAIT), Some(Resource::Loading));
    assert_eq!(observer.next_timeout(Duration::from_millis(100)), None);
}
