use std::path::PathBuf;

use yatra::{
    loader::{self, Config, RouteSource},
    lookup::Direction,
    prelude::*,
};

const HEADER: &str =
    "alternative_id,category,label,highlights,estimated_fare,first_bus,last_bus,mode,route,from,to,duration_min\n";

fn data_path() -> PathBuf {
    format!("{}/tests/data/routes.csv", env!("CARGO_MANIFEST_DIR")).into()
}

fn load_text(rows: &str) -> Result<Vec<RouteAlternative>, loader::Error> {
    RouteSource::default()
        .from_text(format!("{HEADER}{rows}"))
        .load()
}

#[test]
fn load_file_groups_steps() {
    let source = RouteSource::new(Config::default()).from_file(data_path());
    let alternatives = source.load().unwrap();
    assert_eq!(alternatives.len(), 3);

    let direct = &alternatives[0];
    assert_eq!(&*direct.id, "wgl-bcm-direct");
    assert_eq!(direct.category, Category::Direct);
    assert_eq!(&*direct.label, "Warangal → Bhadrachalam");
    assert_eq!(direct.highlights.len(), 2);
    assert_eq!(direct.journey.steps.len(), 2);
    assert_eq!(direct.journey.steps[0].mode, Mode::Walk);
    assert_eq!(direct.journey.total_duration().as_minutes(), 195);
    assert_eq!(direct.journey.transfers(), 0);

    let fast = &alternatives[1];
    assert_eq!(&*fast.label, "Warangal express");
    assert_eq!(fast.journey.steps[1].mode.route(), Some("Express 21"));
    assert_eq!(fast.journey.transfers(), 1);
}

#[test]
fn load_file_into_table() {
    let source = RouteSource::default().from_file(data_path());
    let table = RouteTable::new().with_source(&source).unwrap();
    assert_eq!(table.len(), 2);

    let routes = table.find_routes("warangal", "bhadrachalam").unwrap();
    assert_eq!(routes.len(), 2);
    let back = table.lookup("Suryapet", "Nalgonda").solve().unwrap();
    assert_eq!(back.direction, Direction::Reverse);
    assert_eq!(&*back.alternatives[0].id, "nlg-spt-direct-reverse");
    assert!(table.find_routes("Hyderabad", "Karimnagar").is_none());
}

#[test]
fn load_empty_source() {
    assert!(RouteSource::default().load().unwrap().is_empty());
    assert!(load_text("").unwrap().is_empty());
}

#[test]
fn load_missing_file() {
    let source = RouteSource::default().from_file("does/not/exist.csv".into());
    assert!(matches!(source.load(), Err(loader::Error::Io(_))));
}

#[test]
fn load_unknown_category() {
    let result = load_text("a,slowest,,,10,6 AM,9 PM,bus,Bus 1,X,Y,30\n");
    assert!(matches!(result, Err(loader::Error::UnknownCategory { .. })));
}

#[test]
fn load_unknown_mode() {
    let result = load_text("a,direct,,,10,6 AM,9 PM,train,T 1,X,Y,30\n");
    assert!(matches!(result, Err(loader::Error::UnknownMode { .. })));
}

#[test]
fn load_bus_without_route() {
    let result = load_text("a,direct,,,10,6 AM,9 PM,bus,,X,Y,30\n");
    assert!(matches!(result, Err(loader::Error::MissingRoute(id)) if id == "a"));
}

#[test]
fn load_walk_with_route() {
    let result = load_text("a,direct,,,10,6 AM,9 PM,walk,Bus 1,X,Y,5\n");
    assert!(matches!(result, Err(loader::Error::RouteOnWalk(_))));
}

#[test]
fn load_disconnected_steps() {
    let result = load_text(
        "a,direct,,,10,6 AM,9 PM,bus,Bus 1,X,Y,30\n\
         a,direct,,,10,6 AM,9 PM,bus,Bus 2,Z,W,30\n",
    );
    assert!(matches!(result, Err(loader::Error::DisconnectedSteps { .. })));
}

#[test]
fn load_split_alternative() {
    let result = load_text(
        "a,direct,,,10,6 AM,9 PM,bus,Bus 1,X,Y,30\n\
         b,direct,,,10,6 AM,9 PM,bus,Bus 2,X,Y,30\n\
         a,direct,,,10,6 AM,9 PM,bus,Bus 3,Y,Z,30\n",
    );
    assert!(matches!(result, Err(loader::Error::DuplicateAlternative(id)) if id == "a"));
}

#[test]
fn load_oversized_durations() {
    let alternatives = load_text(
        "a,direct,,,10,6 AM,9 PM,bus,Bus 1,X,Y,4294967295\n\
         a,direct,,,10,6 AM,9 PM,walk,,Y,Z,1\n",
    )
    .unwrap();
    let table = RouteTable::new().with_alternatives(alternatives);
    let route = table.find_route("X", "Z").unwrap();
    assert_eq!(route.journey.total_duration().as_minutes(), u32::MAX);
    let back = table.find_route("Z", "X").unwrap();
    assert_eq!(back.journey.total_duration().as_minutes(), u32::MAX);
}

#[test]
fn load_custom_delimiter() {
    let config = Config {
        delimiter: b';',
        highlight_separator: '/',
    };
    let text = "alternative_id;category;label;highlights;estimated_fare;first_bus;last_bus;mode;route;from;to;duration_min\n\
                a;cheapest;;Slow/Cheap;40;7 AM;6 PM;bus;Bus 5;X;Y;120\n";
    let alternatives = RouteSource::new(config).from_text(text).load().unwrap();
    assert_eq!(alternatives[0].category, Category::Cheapest);
    assert_eq!(alternatives[0].highlights.len(), 2);
}
