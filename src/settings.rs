use std::time::Duration;

use rand::distr::Alphanumeric;
use rand::Rng;

pub const SETTING_RNG_SEED : &str = "Battle RNG Seed";
pub const SETTING_BG_MUSIC : &str = "Background music";
pub const SETTING_BG_MUSIC_ENABLED : &str = "Background music enabled";
pub const SETTING_START_DELAY : &str = "Start delay (ms)";
pub const SETTING_ROUND_DELAY : &str = "Round delay (ms)";
pub const SETTING_ATTACK_DELAY : &str = "Attack delay (ms)";
pub const SETTING_COUNTER_DELAY : &str = "Counterattack delay (ms)";
pub const SETTING_MESSAGE_TIMEOUT : &str = "Result message timeout (ms)";

pub struct Setting<T> {
    pub name : String,
    pub value : T
}

pub struct Settings {
    pub bool_settings : Vec<Setting<bool>>,
    pub u32_settings : Vec<Setting<u32>>,
    pub string_settings : Vec<Setting<String>>
}

impl Settings {
    pub fn find_string_setting_value(&self, name : &str) -> Option<String> {
        self.string_settings.iter().find(|x| x.name == name).map(|s| s.value.clone())
    }

    pub fn find_bool_setting_value(&self, name : &str) -> Option<bool> {
        self.bool_settings.iter().find(|x| x.name == name).map(|s| s.value)
    }

    pub fn find_u32_setting_value(&self, name : &str) -> Option<u32> {
        self.u32_settings.iter().find(|x| x.name == name).map(|s| s.value)
    }

    pub fn get_rng_seed(&self) -> Option<String> {
        self.find_string_setting_value(SETTING_RNG_SEED)
    }

    pub fn is_music_enabled(&self) -> bool {
        self.find_bool_setting_value(SETTING_BG_MUSIC_ENABLED).unwrap_or(false)
    }

    pub fn get_music_volume(&self) -> u32 {
        self.find_u32_setting_value(SETTING_BG_MUSIC).unwrap_or(100).min(100)
    }

    /*
        Any delay setting as a Duration, zero if the setting is missing
     */
    pub fn get_delay(&self, name : &str) -> Duration {
        Duration::from_millis(self.find_u32_setting_value(name).unwrap_or(0) as u64)
    }
}

fn build_random_seed() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}

fn build_delay_settings(start: u32, round: u32, attack: u32, counter: u32, message_timeout: u32) -> Vec<Setting<u32>> {
    vec![
        Setting { name: SETTING_START_DELAY.to_string(), value: start },
        Setting { name: SETTING_ROUND_DELAY.to_string(), value: round },
        Setting { name: SETTING_ATTACK_DELAY.to_string(), value: attack },
        Setting { name: SETTING_COUNTER_DELAY.to_string(), value: counter },
        Setting { name: SETTING_MESSAGE_TIMEOUT.to_string(), value: message_timeout }
    ]
}

pub fn build_settings() -> Settings {
    let seed : Setting<String> = Setting { name: SETTING_RNG_SEED.to_string(), value: build_random_seed() };
    let bg_music_enabled : Setting<bool> = Setting { name: SETTING_BG_MUSIC_ENABLED.to_string(), value: true };
    let mut u32_settings = vec![Setting { name: SETTING_BG_MUSIC.to_string(), value: 100 }];
    u32_settings.extend(build_delay_settings(1000, 1000, 600, 800, 3000));
    Settings { bool_settings: vec![bg_music_enabled], string_settings: vec![seed], u32_settings }
}

/*
    Fixed seed, no music and no waiting
 */
#[cfg(test)]
pub fn build_test_settings() -> Settings {
    build_timed_test_settings(0, 0, 0, 0, 0)
}

/*
    Fixed seed and no music, with the given delays in milliseconds
 */
#[cfg(test)]
pub fn build_timed_test_settings(start: u32, round: u32, attack: u32, counter: u32, message_timeout: u32) -> Settings {
    let seed : Setting<String> = Setting { name: SETTING_RNG_SEED.to_string(), value: "test".to_string() };
    let bg_music_enabled : Setting<bool> = Setting { name: SETTING_BG_MUSIC_ENABLED.to_string(), value: false };
    let mut u32_settings = vec![Setting { name: SETTING_BG_MUSIC.to_string(), value: 0 }];
    u32_settings.extend(build_delay_settings(start, round, attack, counter, message_timeout));
    Settings { bool_settings: vec![bg_music_enabled], string_settings: vec![seed], u32_settings }
}
