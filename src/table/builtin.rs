use crate::table::{Category, Itinerary, RouteAlternative, Step};

struct Entry {
    id: &'static str,
    category: Category,
    highlights: &'static [&'static str],
    estimated_fare: u32,
    first_bus: &'static str,
    last_bus: &'static str,
    from: &'static str,
    to: &'static str,
    steps: Vec<Step>,
}

impl From<Entry> for RouteAlternative {
    fn from(value: Entry) -> Self {
        Self {
            id: value.id.into(),
            category: value.category,
            label: format!("{} → {}", value.from, value.to).into(),
            highlights: value.highlights.iter().map(|&value| value.into()).collect(),
            estimated_fare: value.estimated_fare,
            first_bus: value.first_bus.into(),
            last_bus: value.last_bus.into(),
            journey: Itinerary::new(value.from, value.to, value.steps),
        }
    }
}

pub(crate) fn alternatives() -> Vec<RouteAlternative> {
    let entries = vec![
        Entry {
            id: "hyd-knr-direct",
            category: Category::Direct,
            highlights: &["Single bus", "No transfers", "Walk to JBS"],
            estimated_fare: 95,
            first_bus: "5:00 AM",
            last_bus: "10:30 PM",
            from: "Hyderabad",
            to: "Karimnagar",
            steps: vec![
                Step::walk("Hyderabad", "JBS Bus Station", 8),
                Step::bus("Bus 226", "JBS Bus Station", "Karimnagar Bus Stand", 175),
                Step::walk("Karimnagar Bus Stand", "Karimnagar", 10),
            ],
        },
        Entry {
            id: "hyd-knr-fast",
            category: Category::Fastest,
            highlights: &["Express service", "1 transfer", "Via Siddipet"],
            estimated_fare: 105,
            first_bus: "5:30 AM",
            last_bus: "9:45 PM",
            from: "Hyderabad",
            to: "Karimnagar",
            steps: vec![
                Step::bus("Rajdhani 1", "Hyderabad", "Siddipet", 95),
                Step::bus("Express 12", "Siddipet", "Karimnagar", 80),
            ],
        },
        Entry {
            id: "vjw-btg-fast",
            category: Category::Fastest,
            highlights: &["3 buses", "1 ticket per leg", "Rural connectivity"],
            estimated_fare: 275,
            first_bus: "5:30 AM",
            last_bus: "9:00 PM",
            from: "Vijayawada",
            to: "Buttayagudem",
            steps: vec![
                Step::bus("Bus 101", "Vijayawada", "Eluru", 90),
                Step::bus("Bus 202", "Eluru", "Jangareddygudem", 120),
                Step::bus("Bus 303", "Jangareddygudem", "Buttayagudem", 75),
            ],
        },
        Entry {
            id: "rjy-mml-direct",
            category: Category::Direct,
            highlights: &["Forest route", "2 legs", "Scenic ride"],
            estimated_fare: 200,
            first_bus: "6:00 AM",
            last_bus: "8:00 PM",
            from: "Rajahmundry",
            to: "Maredumilli",
            steps: vec![
                Step::bus("Bus 111", "Rajahmundry", "Rampachodavaram", 105),
                Step::bus("Bus 222", "Rampachodavaram", "Maredumilli", 75),
            ],
        },
        Entry {
            id: "rjy-rcm-direct",
            category: Category::Direct,
            highlights: &["Single bus", "Hilly stretch"],
            estimated_fare: 125,
            first_bus: "5:45 AM",
            last_bus: "7:30 PM",
            from: "Rajahmundry",
            to: "Rampachodavaram",
            steps: vec![Step::bus(
                "Bus 121",
                "Rajahmundry",
                "Rampachodavaram",
                100,
            )],
        },
        Entry {
            id: "viz-cpl-scenic",
            category: Category::Comfortable,
            highlights: &["Araku belt", "Ghats", "2 legs"],
            estimated_fare: 245,
            first_bus: "5:00 AM",
            last_bus: "7:00 PM",
            from: "Visakhapatnam",
            to: "Chintapalli",
            steps: vec![
                Step::bus("Bus 131", "Visakhapatnam", "Narsipatnam", 150),
                Step::bus("Bus 241", "Narsipatnam", "Chintapalli", 120),
            ],
        },
    ];
    entries.into_iter().map(RouteAlternative::from).collect()
}
