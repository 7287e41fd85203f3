pub mod application {
    pub mod product {
        pub mod scan;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod alternatives;
        pub mod errors;
        pub mod model;
        pub mod scoring;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod scan;
        }
    }
}
