//! Markup details derived from the particle index and the build time instead
//! of randomness or the clock, so the server and hydrated renders agree.

use chrono::{DateTime, Datelike};

/// Build timestamp captured by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Floating particles behind the hero.
pub const PARTICLES: usize = 20;

/// Percent offsets of particle `i` from the left and top of the hero.
pub fn particle_position(i: usize) -> (usize, usize) {
    ((i * 37 + 11) % 100, (i * 53 + 29) % 100)
}

pub fn particle_style(i: usize) -> String {
    let (left, top) = particle_position(i);
    let duration = 3.0 + (i % 5) as f64 * 0.4;
    let delay = (i % 4) as f64 * 0.5;
    format!(
        "left: {left}%; top: {top}%; animation: float {duration:.1}s ease-in-out {delay:.1}s infinite"
    )
}

/// Copyright year and display date of an RFC 3339 build time.
pub fn build_stamp(build_time: &str) -> Option<(i32, String)> {
    let built = DateTime::parse_from_rfc3339(build_time).ok()?;
    Some((built.year(), built.format("%b %e, %Y").to_string()))
}
