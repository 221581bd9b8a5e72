pub const DEMO_USER_ID: i32 = 1;

pub mod catalog {

    pub const BRANDS: &[&str] = &[
        "OEM",
        "Bosch",
        "ACDelco",
        "Motorcraft",
        "Beck Arnley",
        "Febi",
        "Gates",
        "NGK",
    ];

    pub const OEM_BRAND: &str = "OEM";

    pub const PART_CATEGORIES: &[&str] = &[
        "Engine Parts",
        "Brake System",
        "Suspension",
        "Electrical",
        "Transmission",
        "Exhaust System",
        "Cooling System",
        "Fuel System",
        "Body Parts",
        "Interior",
    ];

    pub const ENGINE_TYPES: &[&str] = &["2.4L 4-Cyl", "3.5L V6"];

    pub const FEATURES: &[&str] = &[
        "High-quality materials",
        "Perfect fit guarantee",
        "Easy installation",
        "Tested for durability",
        "Corrosion resistant",
        "Temperature resistant",
    ];

    pub const INSTALL_NOTE: &str = "Professional installation recommended";

    pub const PART_NUMBER_PREFIX: &str = "AP-";

    pub const PART_NUMBER_LEN: usize = 9;

    pub const MIN_BASE_PRICE: u32 = 25;

    pub const MAX_BASE_PRICE: u32 = 424;

    pub const DEFAULT_MIN_RESULTS: usize = 8;

    pub const DEFAULT_MAX_RESULTS: usize = 22;
}

pub mod vehicles {

    pub const MAKES: &[&str] = &[
        "Toyota",
        "Honda",
        "Ford",
        "Chevrolet",
        "BMW",
        "Mercedes-Benz",
        "Audi",
        "Volkswagen",
        "Nissan",
        "Hyundai",
        "Kia",
        "Mazda",
    ];

    pub const MODELS: &[(&str, &[&str])] = &[
        ("Toyota", &["Camry", "Corolla", "RAV4", "Highlander", "Prius"]),
        ("Honda", &["Civic", "Accord", "CR-V", "Pilot", "Fit"]),
        ("Ford", &["F-150", "Mustang", "Explorer", "Focus", "Escape"]),
    ];

    pub const YEAR_SPAN: i32 = 30;
}

pub mod results {

    pub const PAGE_SIZE: usize = 12;

    pub const DEFAULT_MIN_PRICE: f64 = 0.0;

    pub const DEFAULT_MAX_PRICE: f64 = 1000.0;
}

pub mod shipping {

    /// Orders strictly above this subtotal ship free; the same figure drives the
    /// free-shipping results filter.
    pub const FREE_SHIPPING_THRESHOLD: f64 = 100.0;

    pub const FLAT_SURCHARGE: f64 = 9.99;
}

pub mod limits {

    pub const HISTORY_LIMIT: u64 = 10;
}
