// tests/y_axis_formatting_test.rs

use trial_csv_render::axis_format::ScientificFormatter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_inside_window_stay_plain() {
        let formatter = ScientificFormatter::for_axis(0.0, 9.5);
        assert!(!formatter.is_scientific());
        assert_eq!(formatter.format_tick(0.0), "0");
        assert_eq!(formatter.format_tick(2.5), "2.5");
        assert_eq!(formatter.format_tick(8.0), "8");
        assert_eq!(formatter.axis_label("Motor Load [%]"), "Motor Load [%]");
    }

    #[test]
    fn test_large_values_use_offset() {
        let formatter = ScientificFormatter::for_axis(0.0, 250.0);
        assert_eq!(formatter.order_of_magnitude(), 2);
        assert_eq!(formatter.format_tick(150.0), "1.5");
        assert_eq!(formatter.format_tick(200.0), "2");
        assert_eq!(formatter.axis_label("Load [%]"), "Load [%] (×10^2)");
    }

    #[test]
    fn test_small_values_use_negative_offset() {
        let formatter = ScientificFormatter::for_axis(0.0, 0.05);
        assert_eq!(formatter.order_of_magnitude(), -2);
        assert_eq!(formatter.format_tick(0.03), "3");
        assert_eq!(formatter.axis_label("Mass [kg]"), "Mass [kg] (×10^-2)");
    }

    #[test]
    fn test_power_limits_are_inclusive() {
        // log10 of the largest magnitude landing exactly on a limit switches scaling on.
        assert_eq!(ScientificFormatter::for_axis(0.0, 0.5).order_of_magnitude(), -1);
        assert_eq!(ScientificFormatter::for_axis(0.0, 12.0).order_of_magnitude(), 1);
        assert_eq!(ScientificFormatter::for_axis(-3.0, 1.0).order_of_magnitude(), 0);
    }

    #[test]
    fn test_negative_axis_uses_largest_magnitude() {
        let formatter = ScientificFormatter::for_axis(-20.0, 5.0);
        assert_eq!(formatter.order_of_magnitude(), 1);
        assert_eq!(formatter.format_tick(-15.0), "-1.5");
    }

    #[test]
    fn test_degenerate_ranges_stay_plain() {
        assert!(!ScientificFormatter::for_axis(0.0, 0.0).is_scientific());
        assert!(!ScientificFormatter::for_axis(f64::NAN, 1.0).is_scientific());
    }

    #[test]
    fn test_custom_limits() {
        let formatter = ScientificFormatter::for_range(0.0, 500.0, (-3, 4));
        assert!(!formatter.is_scientific());
        assert_eq!(formatter.format_tick(125.0), "125");
    }

    #[test]
    fn test_narrow_axis_ticks_stay_distinct() {
        let formatter = ScientificFormatter::for_axis(10.0, 10.5);
        assert_eq!(formatter.order_of_magnitude(), 1);
        let labels: Vec<String> = (0..=6)
            .map(|i| formatter.format_tick(10.0 + 0.05 * i as f64))
            .collect();
        assert_eq!(labels, vec!["1", "1.005", "1.01", "1.015", "1.02", "1.025", "1.03"]);
        let mut unique = labels.clone();
        unique.dedup();
        assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn test_axis_span_sets_precision_for_data_extent() {
        // Exponent from the data, precision from the padded axis split into ten steps.
        let formatter = ScientificFormatter::for_axis(120.0, 130.0).with_tick_step(1.3);
        assert_eq!(formatter.order_of_magnitude(), 2);
        assert_eq!(formatter.decimals(), 2);
        assert_eq!(formatter.format_tick(121.0), "1.21");
        assert_eq!(formatter.format_tick(125.0), "1.25");
    }
}
