/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub elevator: ElevatorConfig,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct ElevatorConfig {
    pub bottom_floor: u8,
    pub top_floor: u8,
    pub floor_travel_time: u64,
}

impl Default for ElevatorConfig {
    fn default() -> ElevatorConfig {
        ElevatorConfig {
            bottom_floor: 1,
            top_floor: 100,
            floor_travel_time: 10,
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config() -> Result<Config, toml::de::Error> {
    // A missing config.toml falls back to the built-in defaults, so the
    // program runs without any files present. A malformed file is fatal.
    match fs::read_to_string("config.toml") {
        Ok(config_str) => toml::from_str(&config_str),
        Err(_) => Ok(Config::default()),
    }
}
