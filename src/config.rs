use anyhow::Context;
use time::UtcOffset;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub host: String,
    pub port: u16,
    /// Fixed offset that defines where a "local" calendar day starts and ends.
    pub day_offset: UtcOffset,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "fitplan".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "fitplan-users".into()),
            ttl_minutes: env_parse("JWT_TTL_MINUTES").unwrap_or(60),
            refresh_ttl_minutes: env_parse("JWT_REFRESH_TTL_MINUTES").unwrap_or(60 * 24 * 14),
        };
        let day_offset =
            day_offset_from(std::env::var("DAY_UTC_OFFSET_MINUTES").ok().as_deref())?;

        Ok(Self {
            database_url,
            jwt,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_parse("APP_PORT").unwrap_or(8080),
            day_offset,
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

/// Unset means UTC; a set value must be a whole number of minutes.
fn day_offset_from(raw: Option<&str>) -> anyhow::Result<UtcOffset> {
    let minutes = match raw.map(str::trim) {
        None => 0,
        Some(raw) => raw
            .parse::<i32>()
            .with_context(|| format!("DAY_UTC_OFFSET_MINUTES is not a number of minutes: {raw:?}"))?,
    };
    offset_from_minutes(minutes)
}

pub fn offset_from_minutes(minutes: i32) -> anyhow::Result<UtcOffset> {
    anyhow::ensure!(
        minutes.abs() < 24 * 60,
        "DAY_UTC_OFFSET_MINUTES out of range: {minutes}"
    );
    UtcOffset::from_whole_seconds(minutes * 60).context("build day offset")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_from_minutes_accepts_whole_and_partial_hours() {
        assert_eq!(offset_from_minutes(0).unwrap(), UtcOffset::UTC);
        assert_eq!(offset_from_minutes(120).unwrap().whole_hours(), 2);
        let india = offset_from_minutes(330).unwrap();
        assert_eq!(india.whole_minutes(), 330);
        assert_eq!(offset_from_minutes(-300).unwrap().whole_hours(), -5);
    }

    #[test]
    fn day_offset_defaults_to_utc_only_when_unset() {
        assert_eq!(day_offset_from(None).unwrap(), UtcOffset::UTC);
        assert_eq!(day_offset_from(Some(" -300 ")).unwrap().whole_hours(), -5);

        for bad in ["2h", "UTC+2", "", "1.5"] {
            let err = day_offset_from(Some(bad)).unwrap_err();
            assert!(format!("{err:#}").contains("DAY_UTC_OFFSET_MINUTES"), "{bad}");
        }
        assert!(day_offset_from(Some("1440")).is_err());
    }

    #[test]
    fn offset_from_minutes_rejects_a_full_day() {
        assert!(offset_from_minutes(24 * 60).is_err());
        assert!(offset_from_minutes(-24 * 60).is_err());
    }
}
