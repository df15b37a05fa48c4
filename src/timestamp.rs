//! State-change timestamp localization.

use crate::error::BuildError;
use chrono::DateTime;
use chrono_tz::Tz;

/// Rendering of a localized instant, e.g. `2022-06-01 21:08:19.123 +0900 KST`.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %z %Z";

/// Convert a CloudWatch timestamp to the given zone for display.
///
/// CloudWatch writes UTC as `+0000`, which RFC 3339 does not allow, so it is
/// rewritten to `Z` before parsing. An empty input yields an empty string.
///
/// # Errors
///
/// * [`BuildError::TimeParse`] - non-empty input that is not an RFC 3339 instant
/// * [`BuildError::LocationLoad`] - `timezone` is not in the tz database
pub fn localize(raw: &str, timezone: &str) -> Result<String, BuildError> {
    if raw.is_empty() {
        return Ok(String::new());
    }

    let normalized = raw.replace("+0000", "Z");
    let instant =
        DateTime::parse_from_rfc3339(&normalized).map_err(|source| BuildError::TimeParse {
            input: raw.to_string(),
            source,
        })?;

    let tz: Tz = timezone
        .parse()
        .map_err(|_| BuildError::LocationLoad(timezone.to_string()))?;

    Ok(instant.with_timezone(&tz).format(DISPLAY_FORMAT).to_string())
}
