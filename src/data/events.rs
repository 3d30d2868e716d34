use crate::models::{Category, Event, EventStatus, TeamSize};

const LOGO: &str = "/static/logo.svg";

/// The festival's event catalog, in display order.
pub fn catalog() -> Vec<Event> {
    vec![
        Event {
            id: "1",
            title: "GANGSTA",
            subtitle: "Solo Rap Competition",
            category: Category::MusicAndDance,
            image: LOGO,
            date: "10 Mar",
            entry_fee: "Free",
            team_size: TeamSize::Individual,
            venue: "AVH",
            status: EventStatus::Open,
            on_campus: true,
        },
        Event {
            id: "2",
            title: "GOONJ",
            subtitle: "A Solo Singing Competition",
            category: Category::MusicAndDance,
            image: LOGO,
            date: "10 Mar",
            entry_fee: "Free",
            team_size: TeamSize::Individual,
            venue: "Main Stage",
            status: EventStatus::Open,
            on_campus: true,
        },
        Event {
            id: "3",
            title: "GROOVES",
            subtitle: "A Group Dance Competition",
            category: Category::MusicAndDance,
            image: LOGO,
            date: "10 Mar",
            entry_fee: "Free",
            team_size: TeamSize::Range { min: 3, max: 18 },
            venue: "Main Stage",
            status: EventStatus::Open,
            on_campus: true,
        },
        Event {
            id: "4",
            title: "WALL RUSH",
            subtitle: "Wall Painting Competition",
            category: Category::FineArts,
            image: LOGO,
            date: "11 Mar",
            entry_fee: "Free",
            team_size: TeamSize::Range { min: 2, max: 3 },
            venue: "H1 Wall",
            status: EventStatus::Open,
            on_campus: true,
        },
        Event {
            id: "5",
            title: "WITCOINS",
            subtitle: "Quiz Competition",
            category: Category::LiteratureAndDebate,
            image: LOGO,
            date: "10 Mar",
            entry_fee: "Free",
            team_size: TeamSize::Range { min: 2, max: 2 },
            venue: "Room-50",
            status: EventStatus::Open,
            on_campus: true,
        },
        Event {
            id: "6",
            title: "ABHIVYAKTI",
            subtitle: "An Extempore Speaking Event",
            category: Category::LiteratureAndDebate,
            image: LOGO,
            date: "11 Mar",
            entry_fee: "Free",
            team_size: TeamSize::Individual,
            venue: "AVH",
            status: EventStatus::Open,
            on_campus: true,
        },
        Event {
            id: "7",
            title: "BAYAN",
            subtitle: "Open Mic Competition",
            category: Category::ActingAndDrama,
            image: LOGO,
            date: "10 Mar",
            entry_fee: "Free",
            team_size: TeamSize::Individual,
            venue: "AVH",
            status: EventStatus::Open,
            on_campus: true,
        },
        Event {
            id: "8",
            title: "CHITRAKARI",
            subtitle: "Sketching Competition",
            category: Category::FineArts,
            image: LOGO,
            date: "10 Mar",
            entry_fee: "Free",
            team_size: TeamSize::Individual,
            venue: "Room No. 37",
            status: EventStatus::Open,
            on_campus: true,
        },
    ]
}
