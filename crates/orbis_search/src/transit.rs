//! Window sweep driver.
//!
//! [`compute_transits`] walks a window in one-day chunks, hands each
//! chunk to the coarse scanner, then filters and orders the collected
//! events. The final chunk is clamped so no event falls outside the
//! half-open window.

use orbis_chart::NatalChart;
use orbis_ephem::Ephemeris;
use orbis_time::TransitWindow;

use crate::error::SearchError;
use crate::event::TransitEvent;
use crate::scan::scan_day;
use crate::transit_types::TransitConfig;

/// Every aspect crossing inside `window`, refined to the exact instant.
///
/// Events are deduplicated per day chunk: one crossing of a
/// (transiting, aspect, natal) triple per chunk. If
/// `config.min_significance` is positive, events scoring below it are
/// dropped. The result is ordered by instant; simultaneous events keep
/// detection order (transiting body, then natal body, then aspect).
pub fn compute_transits<E: Ephemeris>(
    oracle: &E,
    chart: &NatalChart,
    window: TransitWindow,
    config: &TransitConfig,
) -> Result<Vec<TransitEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let mut events = Vec::new();
    let mut day_start = window.start();
    while day_start < window.end() {
        let next = day_start.add_days(1.0);
        let day_end = if next < window.end() {
            next
        } else {
            window.end()
        };
        scan_day(oracle, chart, day_start, day_end, config, &mut events)?;
        day_start = next;
    }

    if config.min_significance > 0.0 {
        events.retain(|e| e.significance >= config.min_significance);
    }
    events.sort_by(|a, b| a.instant.value().total_cmp(&b.instant.value()));
    Ok(events)
}

/// [`compute_transits`] over one calendar month (UTC).
pub fn month_transits<E: Ephemeris>(
    oracle: &E,
    chart: &NatalChart,
    year: i32,
    month: u32,
    config: &TransitConfig,
) -> Result<Vec<TransitEvent>, SearchError> {
    let window = TransitWindow::month(year, month)?;
    compute_transits(oracle, chart, window, config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
