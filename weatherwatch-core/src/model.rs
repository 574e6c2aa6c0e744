use std::fmt;

use serde_json::Number;

/// Printed when the provider answers with a status other than 200.
pub const FETCH_ERROR: &str = "ERROR fetching weather data.";

/// Current conditions for one request. Nothing is kept between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Provider-local time string, e.g. "2023-09-11 14:30".
    pub local_time: String,
    /// The provider's number as sent: `21.0` displays as `21.0`.
    pub temperature_c: Number,
    pub humidity: u8,
    pub condition: String,
}

/// Console rendering of a reading for the city the user asked about.
#[derive(Debug, Clone, Copy)]
pub struct WeatherReport<'a> {
    pub city: &'a str,
    pub reading: &'a WeatherReading,
}

impl<'a> WeatherReport<'a> {
    pub fn new(city: &'a str, reading: &'a WeatherReading) -> Self {
        Self { city, reading }
    }
}

impl fmt::Display for WeatherReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.reading;
        write!(
            f,
            "\nDate: {}\nWeather in {}\n{}°C Temperature  {}g.m-3 Humidity\n{}",
            r.local_time, self.city, r.temperature_c, r.humidity, r.condition
        )
    }
}
