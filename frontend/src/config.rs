pub struct Config {
    pub config_path: &'static str,
    pub count_element_id: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            config_path: shared::DEFAULT_CONFIG_PATH,
            count_element_id: shared::DEFAULT_COUNT_ELEMENT_ID,
        }
    }
}

pub const CONFIG: Config = Config::new();
