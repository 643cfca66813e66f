//! Flyable aircraft definitions

use phf::phf_map;

/// Aircraft information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aircraft {
    pub code: &'static str,
    pub name: &'static str,
    pub seats: u8,
}

impl Aircraft {
    pub fn is_double_seater(&self) -> bool {
        self.seats >= 2
    }
}

/// All player aircraft, keyed by the `vehicle` value used in mission files
pub static AIRCRAFT: phf::Map<&'static str, Aircraft> = phf_map! {
    "AV-42C" => Aircraft {
        code: "AV-42C",
        name: "Kestrel",
        seats: 1,
    },
    "FA-26B" => Aircraft {
        code: "FA-26B",
        name: "Wasp",
        seats: 1,
    },
    "F-45A" => Aircraft {
        code: "F-45A",
        name: "Ghost",
        seats: 1,
    },
    "AH-94" => Aircraft {
        code: "AH-94",
        name: "Dragonfly",
        seats: 2,
    },
    "T-55" => Aircraft {
        code: "T-55",
        name: "Tyro",
        seats: 2,
    },
    "EF-24G" => Aircraft {
        code: "EF-24G",
        name: "Mischief",
        seats: 2,
    },
};

/// Get aircraft by its mission file code (exact match)
pub fn aircraft_by_code(code: &str) -> Option<&'static Aircraft> {
    AIRCRAFT.get(code)
}

/// True if the code names a known aircraft with a second crew seat
pub fn is_double_seater(code: &str) -> bool {
    aircraft_by_code(code).is_some_and(Aircraft::is_double_seater)
}
