pub mod application {
    pub mod meal_plan {
        pub mod assign;
        pub mod clear;
        pub mod get;
    }
    pub mod preferences {
        pub mod get;
        pub mod update;
    }
    pub mod recipe {
        pub mod get_details;
        pub mod get_random;
    }
    pub mod saved_recipe {
        pub mod container;
        pub mod synchronizer;
    }
    pub mod search {
        pub mod search_recipes;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod meal_plan {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod assign;
            pub mod clear;
            pub mod get;
        }
    }
    pub mod preferences {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod get;
            pub mod update;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod image;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod get_details;
            pub mod get_random;
        }
    }
    pub mod saved_recipe {
        pub mod model;
        pub mod reducer;
    }
    pub mod search {
        pub mod cache;
        pub mod model;
        pub mod use_cases {
            pub mod search;
        }
    }
    pub mod storage {
        pub mod key;
        pub mod repository;
        pub mod store;
    }
}

#[cfg(test)]
pub(crate) mod test_support;
