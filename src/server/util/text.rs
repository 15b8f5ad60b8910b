/// Title-cases a value for display in email subjects and timelines.
///
/// The first letter of every alphabetic run is upper-cased and the rest lower-cased,
/// so `occupational_therapy` becomes `Occupational_Therapy` and `in progress` becomes
/// `In Progress`.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}

/// Rounds to two decimal places for rates and percentages.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of `part` over `whole`, rounded to two decimals. Zero when `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_words_and_separators() {
        assert_eq!(title_case("physiotherapy"), "Physiotherapy");
        assert_eq!(title_case("in_progress"), "In_Progress");
        assert_eq!(title_case("SPEECH pathology"), "Speech Pathology");
        assert_eq!(title_case("1st visit"), "1St Visit");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn percentage_handles_zero_denominator() {
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(2, 2), 100.0);
    }
}
