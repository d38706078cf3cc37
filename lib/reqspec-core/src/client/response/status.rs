use std::ops::RangeInclusive;

use http::StatusCode;

const VALID_STATUS: RangeInclusive<u16> = 100..=599;

/// The status codes a call accepts, a union of inclusive ranges.
///
/// The default accepts every non-server-error response, `200..500`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedStatusCodes {
    ranges: Vec<RangeInclusive<u16>>,
}

impl ExpectedStatusCodes {
    /// Accepts `200..500`.
    pub fn new() -> Self {
        Self {
            ranges: vec![200..=499],
        }
    }

    /// Accepts exactly one status.
    ///
    /// ```rust
    /// use reqspec_core::ExpectedStatusCodes;
    /// use http::StatusCode;
    ///
    /// let codes = ExpectedStatusCodes::from_status_code(StatusCode::NOT_FOUND);
    /// assert!(codes.contains(404));
    /// assert!(!codes.contains(200));
    /// ```
    pub fn from_status_code(status: StatusCode) -> Self {
        let status = status.as_u16();
        Self {
            ranges: vec![status..=status],
        }
    }

    /// Accepts exactly one status.
    ///
    /// # Panics
    ///
    /// Panics if the status is outside `100..=599`.
    pub fn from_single(status: u16) -> Self {
        Self {
            ranges: vec![checked(status..=status)],
        }
    }

    /// Accepts an inclusive range.
    ///
    /// # Panics
    ///
    /// Panics if a bound is outside `100..=599` or the range is reversed.
    pub fn from_inclusive_range(range: RangeInclusive<u16>) -> Self {
        Self {
            ranges: vec![checked(range)],
        }
    }

    /// Also accepts `status`.
    ///
    /// # Panics
    ///
    /// Panics if the status is outside `100..=599`.
    pub fn add_single(mut self, status: u16) -> Self {
        self.ranges.push(checked(status..=status));
        self
    }

    /// Also accepts `range`.
    ///
    /// # Panics
    ///
    /// Panics if a bound is outside `100..=599` or the range is reversed.
    pub fn add_inclusive_range(mut self, range: RangeInclusive<u16>) -> Self {
        self.ranges.push(checked(range));
        self
    }

    /// Whether `status` is accepted.
    pub fn contains(&self, status: u16) -> bool {
        self.ranges.iter().any(|range| range.contains(&status))
    }

    /// Whether `status` is accepted.
    pub fn contains_status_code(&self, status: StatusCode) -> bool {
        self.contains(status.as_u16())
    }
}

fn checked(range: RangeInclusive<u16>) -> RangeInclusive<u16> {
    assert!(
        VALID_STATUS.contains(range.start()) && VALID_STATUS.contains(range.end()),
        "status code outside {VALID_STATUS:?}: {range:?}"
    );
    assert!(
        range.start() <= range.end(),
        "reversed status code range: {range:?}"
    );
    range
}

impl Default for ExpectedStatusCodes {
    fn default() -> Self {
        Self::new()
    }
}

// `404` for a single status, `400..=404` for a range, `|` between them.
impl std::fmt::Display for ExpectedStatusCodes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut separator = "";
        for range in &self.ranges {
            f.write_str(separator)?;
            if range.start() == range.end() {
                write!(f, "{}", range.start())?;
            } else {
                write!(f, "{}..={}", range.start(), range.end())?;
            }
            separator = " | ";
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_should_reject_server_errors() {
        let codes = ExpectedStatusCodes::default();

        assert!(codes.contains(200));
        assert!(codes.contains(404));
        assert!(codes.contains(499));
        assert!(!codes.contains(500));
        assert!(!codes.contains(199));
    }

    #[test]
    fn single_status_should_only_accept_itself() {
        let codes = ExpectedStatusCodes::from_single(204);

        assert!(codes.contains(204));
        assert!(!codes.contains(200));
        assert!(!codes.contains_status_code(StatusCode::NOT_FOUND));
    }

    #[test]
    fn should_combine_statuses_and_ranges() {
        let codes = ExpectedStatusCodes::from_status_code(StatusCode::OK)
            .add_single(201)
            .add_inclusive_range(400..=404);

        assert!(codes.contains(201));
        assert!(codes.contains(403));
        assert!(!codes.contains(204));
        assert!(!codes.contains(405));
        insta::assert_snapshot!(codes, @"200 | 201 | 400..=404");
    }

    #[test]
    fn should_display_default() {
        insta::assert_snapshot!(ExpectedStatusCodes::default(), @"200..=499");
    }

    #[test]
    #[should_panic(expected = "status code outside 100..=599: 600..=600")]
    fn should_reject_out_of_range_status() {
        ExpectedStatusCodes::from_single(600);
    }

    #[test]
    #[should_panic(expected = "reversed status code range: 300..=200")]
    #[allow(clippy::reversed_empty_ranges)]
    fn should_reject_reversed_range() {
        ExpectedStatusCodes::from_inclusive_range(300..=200);
    }
}
