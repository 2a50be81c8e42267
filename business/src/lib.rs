pub mod application {
    pub mod cart {
        pub mod add_items;
        pub mod delete;
        pub mod get;
        pub mod remove_items;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod codec;
        pub mod errors;
        pub mod locks;
        pub mod metrics;
        pub mod model;
        pub mod repository;
        pub mod snapshot;
        pub mod use_cases {
            pub mod add_items;
            pub mod delete;
            pub mod get;
            pub mod remove_items;
        }
    }
}
