//! The campus placement table compiled into the binary.
//!
//! Page 1 is the ground-floor campus map, pages 2 to 4 are the upper floors of
//! the Academic Building, and page 5 is the Annex and sports complex.

use std::borrow::Cow;

use crate::{LocationPlacement, Position};

macro_rules! area {
    ($page:expr, $x:expr, $y:expr, $w:expr, $h:expr) => {
        Position { page: $page, x: $x, y: $y, width: Some($w), height: Some($h) }
    };
}

macro_rules! point {
    ($page:expr, $x:expr, $y:expr) => {
        Position { page: $page, x: $x, y: $y, width: None, height: None }
    };
}

macro_rules! navigable {
    ($name:expr, [$($pos:expr),+ $(,)?]) => {
        LocationPlacement {
            location_name: Cow::Borrowed($name),
            positions: Cow::Borrowed(&[$($pos),+]),
            location_type: None,
            description: None,
            is_map_only: false,
        }
    };
}

macro_rules! map_only {
    ($name:expr, $kind:expr, [$($pos:expr),+ $(,)?]) => {
        LocationPlacement {
            location_name: Cow::Borrowed($name),
            positions: Cow::Borrowed(&[$($pos),+]),
            location_type: Some(Cow::Borrowed($kind)),
            description: None,
            is_map_only: true,
        }
    };
    ($name:expr, $kind:expr, $description:expr, [$($pos:expr),+ $(,)?]) => {
        LocationPlacement {
            location_name: Cow::Borrowed($name),
            positions: Cow::Borrowed(&[$($pos),+]),
            location_type: Some(Cow::Borrowed($kind)),
            description: Some(Cow::Borrowed($description)),
            is_map_only: true,
        }
    };
}

const CLASS_ROOMS: &str = "CLASS ROOMS";
const OFFICES: &str = "OFFICES";
const FACILITIES: &str = "FACILITIES";
const LABORATORIES: &str = "LABORATORIES";

pub(crate) static CAMPUS: &[LocationPlacement] = &[
    // ── Page 1: ground floor ────────────────────────────────────
    navigable!("Main Gate", [point!(1, 48.1203, 96.4127)]),
    navigable!("Guard House", [point!(1, 41.7325, 94.8816)]),
    navigable!("Administration Building", [area!(1, 8.4457, 70.2538, 30.1887, 12.4873)]),
    navigable!("Registrar's Office", [area!(1, 9.7035, 72.1489, 12.5786, 4.1286)]),
    navigable!("Cashier", [area!(1, 23.0458, 72.1489, 9.4340, 4.1286)]),
    navigable!("Library", [area!(1, 62.2642, 70.9306, 27.4034, 10.8291), area!(2, 60.1977, 66.3283, 29.6496, 13.0288)]),
    navigable!("Chapel", [area!(1, 70.0809, 86.2944, 18.8679, 7.1066)]),
    navigable!("Flagpole", [point!(1, 49.8652, 84.0609)]),
    navigable!("Cafeteria", [area!(1, 8.9847, 48.7310, 26.9542, 9.4755)]),
    navigable!("Student Lounge", [area!(1, 8.9847, 59.2217, 18.3288, 6.0914)]),
    navigable!("Clinic", [area!(1, 28.7511, 59.2217, 9.7035, 6.0914)]),
    navigable!("Guidance Office", [area!(1, 39.4429, 59.2217, 10.2426, 6.0914)]),
    navigable!("Academic Building Lobby", [area!(1, 56.9632, 52.4196, 21.4735, 7.4450)]),
    map_only!("CR101", CLASS_ROOMS, [area!(1, 56.9632, 17.1235, 21.4735, 5.7191)]),
    map_only!("CR102", CLASS_ROOMS, [area!(1, 56.9632, 23.2149, 21.4735, 5.7191)]),
    map_only!("CR103", CLASS_ROOMS, [area!(1, 56.9632, 29.3063, 21.4735, 5.7191)]),
    map_only!("CR104", CLASS_ROOMS, [area!(1, 56.9632, 35.3976, 21.4735, 5.7191)]),
    map_only!("CR105", CLASS_ROOMS, [area!(1, 79.8742, 17.1235, 14.3756, 5.7191)]),
    map_only!("CR106", CLASS_ROOMS, [area!(1, 79.8742, 23.2149, 14.3756, 5.7191)]),
    map_only!("CR107", CLASS_ROOMS, [area!(1, 79.8742, 29.3063, 14.3756, 5.7191)]),
    map_only!("CR108", CLASS_ROOMS, [area!(1, 79.8742, 35.3976, 14.3756, 5.7191)]),
    map_only!("Records Section", OFFICES, "Student records and document requests.", [area!(1, 9.7035, 76.6836, 12.5786, 3.9255)]),
    map_only!("Printing Office", OFFICES, [area!(1, 23.0458, 76.6836, 9.4340, 3.9255)]),
    map_only!("Comfort Room (Ground Floor)", FACILITIES, [area!(1, 56.9632, 41.4890, 6.2893, 4.0609)]),
    map_only!("Canteen Kiosk", FACILITIES, "Snacks and drinks, open 7:00 AM to 5:00 PM.", [point!(1, 36.3881, 50.2538)]),
    map_only!("Bicycle Rack", FACILITIES, [point!(1, 44.6541, 90.1861)]),
    map_only!("Elevator", FACILITIES, "Accessible lift serving all floors of the Academic Building.", [
        area!(1, 64.1509, 41.4890, 4.4924, 3.3841),
        area!(2, 64.1509, 41.4890, 4.4924, 3.3841),
        area!(3, 64.1509, 41.4890, 4.4924, 3.3841),
        area!(4, 64.1509, 41.4890, 4.4924, 3.3841),
    ]),
    map_only!("Fire Exit (East)", FACILITIES, [
        point!(1, 94.6092, 45.6853),
        point!(2, 94.6092, 45.6853),
        point!(3, 94.6092, 45.6853),
        point!(4, 94.6092, 45.6853),
    ]),
    // ── Page 2: second floor ────────────────────────────────────
    navigable!("Computer Laboratory 1", [area!(2, 8.4457, 14.7208, 24.2588, 9.8139)]),
    navigable!("Computer Laboratory 2", [area!(2, 8.4457, 25.8883, 24.2588, 9.8139)]),
    navigable!("Faculty Room", [area!(2, 8.4457, 48.0541, 19.4070, 8.1218)]),
    navigable!("Dean's Office", [area!(2, 29.2004, 48.0541, 11.3208, 8.1218)]),
    map_only!("CR201", CLASS_ROOMS, [area!(2, 56.9632, 17.1235, 21.4735, 5.7191)]),
    map_only!("CR202", CLASS_ROOMS, [area!(2, 56.9632, 23.2149, 21.4735, 5.7191)]),
    map_only!("CR203", CLASS_ROOMS, [area!(2, 56.9632, 29.3063, 21.4735, 5.7191)]),
    map_only!("CR204", CLASS_ROOMS, [area!(2, 56.9632, 35.3976, 21.4735, 5.7191)]),
    map_only!("CR205", CLASS_ROOMS, [area!(2, 79.8742, 17.1235, 14.3756, 5.7191)]),
    map_only!("CR206", CLASS_ROOMS, [area!(2, 79.8742, 23.2149, 14.3756, 5.7191)]),
    map_only!("Server Room", FACILITIES, "Restricted to IT staff.", [area!(2, 34.2318, 14.7208, 8.0863, 5.2453)]),
    map_only!("Faculty Lounge", OFFICES, [area!(2, 8.4457, 57.8680, 13.4771, 5.4145)]),
    map_only!("Comfort Room (Second Floor)", FACILITIES, [area!(2, 56.9632, 41.4890, 6.2893, 4.0609)]),
    // ── Page 3: third floor ─────────────────────────────────────
    navigable!("Science Laboratory", [area!(3, 8.4457, 14.7208, 24.2588, 12.1827)]),
    navigable!("Chemistry Laboratory", [area!(3, 8.4457, 28.4264, 24.2588, 10.1523)]),
    navigable!("Research Center", [area!(3, 8.4457, 48.0541, 22.0126, 9.1371)]),
    map_only!("CR301", CLASS_ROOMS, [area!(3, 56.9632, 17.1235, 21.4735, 5.7191)]),
    map_only!("CR302", CLASS_ROOMS, [area!(3, 56.9632, 23.2149, 21.4735, 5.7191)]),
    map_only!("CR303", CLASS_ROOMS, [area!(3, 56.9632, 29.3063, 21.4735, 5.7191)]),
    map_only!("CR304", CLASS_ROOMS, [area!(3, 56.9632, 35.3976, 21.4735, 5.7191)]),
    map_only!("Stockroom", LABORATORIES, "Chemical and equipment storage for the science laboratories.", [area!(3, 34.2318, 14.7208, 8.0863, 6.4298)]),
    map_only!("Physics Laboratory", LABORATORIES, [area!(3, 79.8742, 17.1235, 14.3756, 11.4382)]),
    map_only!("Comfort Room (Third Floor)", FACILITIES, [area!(3, 56.9632, 41.4890, 6.2893, 4.0609)]),
    // ── Page 4: fourth floor ────────────────────────────────────
    navigable!("Auditorium", [area!(4, 8.4457, 14.7208, 45.8221, 24.3655)]),
    navigable!("Mini Theater", [area!(4, 56.9632, 17.1235, 21.4735, 17.7665)]),
    navigable!("Museum", [area!(4, 8.4457, 48.0541, 28.3019, 11.1675)]),
    map_only!("Control Booth", FACILITIES, [area!(4, 40.7008, 40.2707, 7.1878, 3.5533)]),
    map_only!("Music Room", CLASS_ROOMS, [area!(4, 79.8742, 17.1235, 14.3756, 8.4602)]),
    map_only!("Dance Studio", CLASS_ROOMS, [area!(4, 79.8742, 27.0728, 14.3756, 8.4602)]),
    map_only!("Comfort Room (Fourth Floor)", FACILITIES, [area!(4, 56.9632, 41.4890, 6.2893, 4.0609)]),
    // ── Page 5: annex and sports complex ────────────────────────
    navigable!("Gymnasium", [area!(5, 10.3774, 12.8596, 38.6343, 22.1658)]),
    navigable!("Covered Court", [area!(5, 53.4591, 12.8596, 36.1186, 22.1658)]),
    navigable!("Swimming Pool", [area!(5, 10.3774, 40.2707, 31.4465, 14.7208)]),
    navigable!("Oval Field", [area!(5, 46.4510, 40.2707, 43.1267, 27.0728)]),
    navigable!("Engineering Building", [area!(5, 10.3774, 60.5753, 31.4465, 12.3519)]),
    navigable!("Nursing Building", [area!(5, 10.3774, 75.6345, 31.4465, 11.0321)]),
    navigable!("Dormitory", [area!(5, 46.4510, 72.9272, 21.5633, 14.2132)]),
    navigable!("Parking Area", [area!(5, 70.0809, 72.9272, 19.4968, 14.2132)]),
    map_only!("Locker Rooms", FACILITIES, [area!(5, 10.3774, 35.5330, 18.3288, 3.7225)]),
    map_only!("Equipment Room", FACILITIES, "Sports equipment lending, present a valid student ID.", [area!(5, 30.6379, 35.5330, 18.3288, 3.7225)]),
    map_only!("Bleachers", FACILITIES, [area!(5, 46.4510, 68.0203, 43.1267, 3.8917)]),
    map_only!("Annex Shuttle Stop", FACILITIES, "Shuttle to the main campus every 15 minutes.", [point!(5, 92.8122, 88.3249)]),
];
