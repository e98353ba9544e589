pub mod core {
    pub mod config;
    pub mod error;
    pub mod routes;
    pub mod startup;
    pub mod state;
    pub mod tracing_init;
}

pub mod api {
    pub mod client;
    #[cfg(test)]
    pub(crate) mod fake;
}

pub mod models {
    pub mod profile;
}

pub mod stores {
    pub mod cookie_store;
    pub mod profile_store;
    pub mod session_cache;
}

pub mod handlers {
    pub mod fallback;
    pub mod health;
    pub mod users;
}

pub mod validation {
    pub mod profile;
}

pub mod utils {
    pub mod time;
}

pub mod editor;
pub mod portal;
