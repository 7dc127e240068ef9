use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use restomap_common::location::Coordinates;
use restomap_core::application::services::screen::{RestaurantScreen, ScreenClosed, ScreenEvent};
use restomap_core::domain::view::MapSlot;
use restomap_integration_tests::{
    names, restaurants, Gate, RecordingDetails, RecordingSurface, ScriptedLocation, StaticSource,
};

const SETTLE: Duration = Duration::from_secs(5);

fn abidjan() -> Coordinates {
    Coordinates::new(5.3364, -4.0267)
}

#[tokio::test]
async fn mounted_screen_filters_the_fetched_list() {
    let source = Arc::new(StaticSource::ok(restaurants(&["Pizza Place", "Sushi Bar", "pizza hut"])));
    let location = Arc::new(ScriptedLocation::granted(abidjan()));
    let mut screen = RestaurantScreen::mount(location, source);

    assert!(screen.settle(SETTLE).await);
    screen.dispatch(ScreenEvent::QueryChanged("piz".into()));

    assert_eq!(names(screen.state().displayed()), vec!["Pizza Place", "pizza hut"]);
    assert_eq!(screen.state().canonical().len(), 3);
}

#[tokio::test]
async fn resolved_location_centers_the_map() {
    let source = Arc::new(StaticSource::ok(Vec::new()));
    let location = Arc::new(ScriptedLocation::granted(abidjan()));
    let mut screen = RestaurantScreen::mount(location, source);

    assert!(screen.settle(SETTLE).await);

    let MapSlot::Map(region) = screen.view().map else {
        panic!("map should be visible after the location resolved");
    };
    assert_eq!(region.latitude, 5.3364);
    assert_eq!(region.longitude, -4.0267);
    assert_eq!(region.latitude_delta, 0.0922);
    assert_eq!(region.longitude_delta, 0.0421);
}

#[tokio::test]
async fn denied_permission_keeps_the_loading_indicator() {
    let source = Arc::new(StaticSource::ok(restaurants(&["Sushi Bar"])));
    let location = Arc::new(ScriptedLocation::denied());
    let mut screen = RestaurantScreen::mount(location.clone(), source);

    assert!(screen.settle(SETTLE).await);

    assert_eq!(
        screen.state().error_message().as_deref(),
        Some("Permission to access location was denied")
    );
    assert_eq!(screen.view().map, MapSlot::Loading);
    assert_eq!(location.permission_requests.load(Ordering::SeqCst), 1);
    assert_eq!(location.position_requests.load(Ordering::SeqCst), 0);
    assert_eq!(screen.state().displayed().len(), 1);
}

#[tokio::test]
async fn position_failure_is_recorded_and_map_stays_hidden() {
    let source = Arc::new(StaticSource::ok(Vec::new()));
    let location = Arc::new(ScriptedLocation::failing("no satellites"));
    let mut screen = RestaurantScreen::mount(location, source);

    assert!(screen.settle(SETTLE).await);

    assert_eq!(
        screen.state().error_message().as_deref(),
        Some("Unable to resolve current location: position unavailable: no satellites")
    );
    assert_eq!(screen.view().map, MapSlot::Loading);
}

#[tokio::test]
async fn failed_fetch_leaves_an_empty_list() {
    let source = Arc::new(StaticSource::failing("network unreachable"));
    let location = Arc::new(ScriptedLocation::granted(abidjan()));
    let mut screen = RestaurantScreen::mount(location, source);

    assert!(screen.settle(SETTLE).await);

    assert!(screen.state().canonical().is_empty());
    assert!(screen.state().displayed().is_empty());
    assert!(screen.state().error().is_none());
    assert!(screen.view().items.is_empty());
}

#[tokio::test]
async fn query_then_clear_restores_the_original_list() {
    let source = Arc::new(StaticSource::ok(restaurants(&["Pizza Place", "Sushi Bar", "pizza hut"])));
    let location = Arc::new(ScriptedLocation::denied());
    let mut screen = RestaurantScreen::mount(location, source);
    assert!(screen.settle(SETTLE).await);

    let handle = screen.handle();
    handle.set_query("piz").unwrap();
    handle.clear_query().unwrap();

    let first = screen.next_event().await.unwrap();
    screen.dispatch(first);
    assert_eq!(screen.state().displayed().len(), 2);

    let second = screen.next_event().await.unwrap();
    screen.dispatch(second);
    assert_eq!(screen.state().query(), "");
    assert_eq!(
        names(screen.state().displayed()),
        vec!["Pizza Place", "Sushi Bar", "pizza hut"]
    );
}

#[tokio::test]
async fn fetch_runs_once_regardless_of_location() {
    let source = Arc::new(StaticSource::ok(restaurants(&["A"])));
    let location = Arc::new(ScriptedLocation::granted(abidjan()));
    let mut screen = RestaurantScreen::mount(location, source.clone());

    assert!(screen.settle(SETTLE).await);
    assert!(screen.state().coordinates().is_some());
    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn list_arrives_before_location() {
    let (gate, open) = Gate::pair();
    let source = Arc::new(StaticSource::ok(restaurants(&["A", "B"])));
    let location = Arc::new(ScriptedLocation::granted(abidjan()).gated(gate));
    let mut screen = RestaurantScreen::mount(location, source);

    let event = screen.next_event().await.unwrap();
    assert!(matches!(event, ScreenEvent::Restaurants(_)));
    screen.dispatch(event);
    assert_eq!(screen.state().displayed().len(), 2);
    assert_eq!(screen.view().map, MapSlot::Loading);

    open.send(()).unwrap();
    assert!(screen.settle(SETTLE).await);
    assert!(matches!(screen.view().map, MapSlot::Map(_)));
}

#[tokio::test]
async fn location_arrives_before_list() {
    let (gate, open) = Gate::pair();
    let source = Arc::new(StaticSource::ok(restaurants(&["A", "B"])).gated(gate));
    let location = Arc::new(ScriptedLocation::granted(abidjan()));
    let mut screen = RestaurantScreen::mount(location, source);

    let event = screen.next_event().await.unwrap();
    assert!(matches!(event, ScreenEvent::Location(_)));
    screen.dispatch(event);
    assert!(screen.state().displayed().is_empty());
    assert!(matches!(screen.view().map, MapSlot::Map(_)));

    open.send(()).unwrap();
    assert!(screen.settle(SETTLE).await);
    assert_eq!(screen.state().displayed().len(), 2);
}

#[tokio::test]
async fn query_typed_before_the_list_applies_to_it() {
    let (gate, open) = Gate::pair();
    let source = Arc::new(StaticSource::ok(restaurants(&["Sushi Bar", "Pizza Place"])).gated(gate));
    let location = Arc::new(ScriptedLocation::denied());
    let mut screen = RestaurantScreen::mount(location, source);

    screen.handle().set_query("sushi").unwrap();
    let event = screen.next_event().await.unwrap();
    screen.dispatch(event);

    open.send(()).unwrap();
    assert!(screen.settle(SETTLE).await);
    assert_eq!(names(screen.state().displayed()), vec!["Sushi Bar"]);
}

#[tokio::test]
async fn results_after_unmount_are_dropped() {
    let (location_gate, open_location) = Gate::pair();
    let (source_gate, open_source) = Gate::pair();
    let source = Arc::new(StaticSource::ok(restaurants(&["A"])).gated(source_gate));
    let location = Arc::new(ScriptedLocation::granted(abidjan()).gated(location_gate));
    let screen = RestaurantScreen::mount(location.clone(), source.clone());
    let handle = screen.handle();

    for _ in 0..10 {
        if source.fetches.load(Ordering::SeqCst) == 1
            && location.position_requests.load(Ordering::SeqCst) == 1
        {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    assert_eq!(location.position_requests.load(Ordering::SeqCst), 1);

    screen.unmount();

    let _ = open_location.send(());
    let _ = open_source.send(());
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    assert_eq!(source.fetches_answered.load(Ordering::SeqCst), 0);
    assert_eq!(location.positions_answered.load(Ordering::SeqCst), 0);
    assert_eq!(handle.set_query("late"), Err(ScreenClosed));
}

#[tokio::test]
async fn run_redraws_on_each_change_until_closed() {
    let source = Arc::new(StaticSource::ok(restaurants(&["Pizza Place", "Sushi Bar", "pizza hut"])));
    let location = Arc::new(ScriptedLocation::granted(abidjan()));
    let mut screen = RestaurantScreen::mount(location, source);
    assert!(screen.settle(SETTLE).await);

    let handle = screen.handle();
    handle.set_query("piz").unwrap();
    handle.close().unwrap();

    let mut surface = RecordingSurface::default();
    let details = RecordingDetails::default();
    screen.run(&mut surface, &details).await;

    assert_eq!(surface.frames.len(), 2);

    let initial = &surface.frames[0];
    assert_eq!(initial.query, "");
    assert_eq!(initial.items, 3);
    assert_eq!(initial.separators, 2);
    assert!(initial.map.is_some());
    assert!(!initial.loading);

    let filtered = &surface.frames[1];
    assert_eq!(filtered.query, "piz");
    assert_eq!(filtered.items, 2);
    assert_eq!(filtered.separators, 1);

    let rendered = details.rendered.lock().unwrap();
    assert_eq!(
        rendered[3..],
        [(0, "Pizza Place".to_string()), (1, "pizza hut".to_string())]
    );
    assert!(screen.is_closed());
}
